//! The frame graph: registration, pose resolution and queries.

use crate::{
    components::{Attached, Frame, Pose},
    depth_index::DepthIndex,
    FrameSettings, TransformError,
};
use glam::DVec3;
use hashbrown::HashMap;
use qsim_math::Quaternion;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

/// World poses of every frame, keyed by frame name.
pub type WorldPoses = HashMap<String, Pose>;

/// A branch of the frame graph, from a frame up to the root.
type Branch<'a> = SmallVec<[&'a Frame; 16]>;

/// Owns a tree of named [`Frame`]s and resolves their poses.
///
/// The tree is built from one root frame, then grown with [`FrameManager::add_frame`].
/// A frame can only be registered below a frame that is already known, so the graph is
/// acyclic by construction. Frames are never removed nor reparented.
///
/// Queries take `&self` and mutations `&mut self`: poses cannot change while they are
/// being resolved.
///
/// ```
/// # use qsim_transform::prelude::*;
/// # use qsim_math::Quaternion;
/// # use core::f64::consts::FRAC_PI_2;
/// let mut manager = FrameManager::new(Frame::root("fixed"));
/// manager.add_frame(Frame::new(
///     "arm",
///     Pose::new(Quaternion::from_rotation_z(FRAC_PI_2), glam::DVec3::X),
///     "fixed",
/// ))?;
///
/// let cube = Solid::new("cube", Pose::from_xyz(1.0, 0.0, 0.0), "arm");
/// let pose = manager.pose_of(&cube, "fixed")?;
/// assert!(pose.position.abs_diff_eq(glam::DVec3::new(1.0, 1.0, 0.0), 1e-12));
/// # Ok::<(), TransformError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FrameManager {
    root: Frame,
    frames: HashMap<String, Frame>,
    depth_index: DepthIndex,
    settings: FrameSettings,
}

impl FrameManager {
    /// Creates a manager holding only `root`, with the default [`FrameSettings`].
    pub fn new(root: Frame) -> Self {
        Self::with_settings(root, FrameSettings::default())
    }

    /// Creates a manager holding only `root`.
    ///
    /// A parent name carried by `root` is dropped with a warning.
    pub fn with_settings(mut root: Frame, settings: FrameSettings) -> Self {
        if let Some(parent) = root.detach() {
            warn!(
                "Root frame `{}` names `{}` as its parent, ignoring it",
                root.name(),
                parent
            );
        }

        let mut depth_index = DepthIndex::default();
        depth_index.insert(root.name(), 0);

        let manager = Self {
            root,
            frames: HashMap::new(),
            depth_index,
            settings,
        };
        manager.check_unit_norm(&manager.root);
        debug!("Created frame graph rooted at `{}`", manager.root.name());
        manager
    }

    /// Registers `frame` below its parent.
    ///
    /// # Errors
    ///
    /// * [`TransformError::DuplicateName`] if a frame with the same name exists.
    /// * [`TransformError::UnknownParent`] if the parent is not registered, or if the frame
    ///   has no parent at all.
    pub fn add_frame(&mut self, frame: Frame) -> Result<(), TransformError> {
        if self.contains(frame.name()) {
            return Err(TransformError::DuplicateName(frame.name().to_owned()));
        }

        let parent = frame.parent().unwrap_or_default();
        let Some(parent_depth) = self.depth_index.depth(parent) else {
            return Err(TransformError::UnknownParent {
                frame: frame.name().to_owned(),
                parent: parent.to_owned(),
            });
        };

        let depth = parent_depth + 1;
        self.check_unit_norm(&frame);
        self.depth_index.insert(frame.name(), depth);
        debug!(
            "Registered frame `{}` under `{}` at depth {}",
            frame.name(),
            parent,
            depth
        );
        self.frames.insert(frame.name().to_owned(), frame);
        Ok(())
    }

    /// Computes the world pose of every frame in one pass, parents before children.
    ///
    /// World poses start from the root's own pose: a root moved away from the identity
    /// places the whole graph in the outer space it is expressed in. Use
    /// [`FrameManager::resolve_poses_in`] with the root name for poses relative to the
    /// root frame itself.
    pub fn resolve_world_poses(&self) -> WorldPoses {
        let mut poses = WorldPoses::with_capacity(self.len());

        for frame in self.iter() {
            // Only the root has no parent, and every parent sits one level above its
            // children, so it is always resolved first.
            let pose = match frame.parent().and_then(|parent| poses.get(parent)) {
                Some(parent_pose) => self.compose(parent_pose, frame.pose()),
                None => *frame.pose(),
            };

            trace!("Resolved world pose of `{}`: {}", frame.name(), pose);
            poses.insert(frame.name().to_owned(), pose);
        }

        poses
    }

    /// Every frame expressed in the frame named `target`.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if `target` is not registered.
    pub fn resolve_poses_in(&self, target: &str) -> Result<WorldPoses, TransformError> {
        let mut poses = self.resolve_world_poses();
        let to_target = poses
            .get(target)
            .ok_or_else(|| TransformError::UnknownFrame(target.to_owned()))?
            .inverse();

        for pose in poses.values_mut() {
            *pose = self.compose(&to_target, pose);
        }
        Ok(poses)
    }

    /// World pose of the frame `name`, found by walking its branch. Same value as
    /// [`FrameManager::resolve_world_poses`] gives for `name`.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if `name` is not registered.
    pub fn world_pose(&self, name: &str) -> Result<Pose, TransformError> {
        let branch = self.branch(name)?;
        let mut frames = branch.iter().rev();
        let mut world = frames.next().map(|root| *root.pose()).unwrap_or_default();
        for frame in frames {
            world = self.compose(&world, frame.pose());
        }
        Ok(world)
    }

    /// Pose of the frame `frame` relative to the frame `target`.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if either frame is not registered.
    pub fn pose_in_frame(&self, frame: &str, target: &str) -> Result<Pose, TransformError> {
        let target = self.world_pose(target)?;
        let frame = self.world_pose(frame)?;
        Ok(self.compose(&target.inverse(), &frame))
    }

    /// Pose of `entity` relative to the frame `target`.
    ///
    /// The result is `world(target)⁻¹ * world(frame) * local`. With the root as `target`,
    /// it matches `resolve_world_poses()[frame] * local` only while the root pose is the
    /// identity; otherwise it matches the poses of `resolve_poses_in(root)`.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if `target` or the frame `entity` is attached to is
    /// not registered.
    pub fn pose_of<E: Attached + ?Sized>(
        &self,
        entity: &E,
        target: &str,
    ) -> Result<Pose, TransformError> {
        let frame = self.pose_in_frame(entity.attachment_frame(), target)?;
        Ok(self.compose(&frame, &entity.local_pose()))
    }

    /// Names of the frames from `name` up to the root, both included.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if `name` is not registered.
    pub fn ancestors(&self, name: &str) -> Result<Vec<&str>, TransformError> {
        Ok(self.branch(name)?.iter().map(|frame| frame.name()).collect())
    }

    /// Distance from `name` to the root, in frames.
    #[inline]
    pub fn depth(&self, name: &str) -> Option<usize> {
        self.depth_index.depth(name)
    }

    /// Names of the frames at `depth`, in registration order.
    pub fn frames_at_depth(&self, depth: usize) -> impl Iterator<Item = &str> + '_ {
        self.depth_index.frames_at(depth)
    }

    /// Depth of the deepest frame. Zero when only the root is registered.
    pub fn max_depth(&self) -> usize {
        self.depth_index.max_depth().unwrap_or_default()
    }

    /// The frame named `name`.
    pub fn frame(&self, name: &str) -> Option<&Frame> {
        if name == self.root.name() {
            Some(&self.root)
        } else {
            self.frames.get(name)
        }
    }

    /// The frame named `name`, for mutation.
    pub fn frame_mut(&mut self, name: &str) -> Option<&mut Frame> {
        if name == self.root.name() {
            Some(&mut self.root)
        } else {
            self.frames.get_mut(name)
        }
    }

    /// Returns `true` if a frame named `name` is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.depth_index.depth(name).is_some()
    }

    /// Number of registered frames, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len() + 1
    }

    /// Always `false`: a manager holds at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All frames, from the root down, each level in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Frame> + '_ {
        self.depth_index
            .levels()
            .iter()
            .flatten()
            .filter_map(|name| self.frame(name))
    }

    /// The root frame.
    #[inline]
    pub fn root(&self) -> &Frame {
        &self.root
    }

    /// Name of the root frame.
    #[inline]
    pub fn root_name(&self) -> &str {
        self.root.name()
    }

    /// Settings the manager was created with.
    #[inline]
    pub fn settings(&self) -> &FrameSettings {
        &self.settings
    }

    /// Moves the frame `name` by `delta`, expressed in its parent frame.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if `name` is not registered.
    pub fn translate(&mut self, name: &str, delta: DVec3) -> Result<(), TransformError> {
        self.frame_mut_or_err(name)?.translate(delta);
        debug!("Translated frame `{}` by {}", name, delta);
        Ok(())
    }

    /// Rotates the frame `name` by `rotation`, applied in its parent frame.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if `name` is not registered.
    pub fn rotate(&mut self, name: &str, rotation: Quaternion) -> Result<(), TransformError> {
        self.frame_mut_or_err(name)?.rotate(rotation);
        debug!("Rotated frame `{}` by {}", name, rotation);
        Ok(())
    }

    /// Replaces the pose of the frame `name`.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if `name` is not registered.
    pub fn set_pose(&mut self, name: &str, pose: Pose) -> Result<(), TransformError> {
        self.frame_mut_or_err(name)?.set_pose(pose);
        debug!("Set pose of frame `{}` to {}", name, pose);
        Ok(())
    }

    /// Restores the pose the frame `name` was created with.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if `name` is not registered.
    pub fn reset_pose(&mut self, name: &str) -> Result<(), TransformError> {
        self.frame_mut_or_err(name)?.reset_pose();
        debug!("Reset pose of frame `{}`", name);
        Ok(())
    }

    fn frame_mut_or_err(&mut self, name: &str) -> Result<&mut Frame, TransformError> {
        self.frame_mut(name)
            .ok_or_else(|| TransformError::UnknownFrame(name.to_owned()))
    }

    /// Frames from `name` up to the root.
    fn branch(&self, name: &str) -> Result<Branch<'_>, TransformError> {
        let mut frame = self
            .frame(name)
            .ok_or_else(|| TransformError::UnknownFrame(name.to_owned()))?;

        let mut branch = Branch::new();
        branch.push(frame);
        while let Some(parent) = frame.parent() {
            frame = self
                .frame(parent)
                .ok_or_else(|| TransformError::UnknownFrame(parent.to_owned()))?;
            branch.push(frame);
        }
        Ok(branch)
    }

    fn compose(&self, outer: &Pose, inner: &Pose) -> Pose {
        let mut pose = outer.compose(inner);
        if self.settings.renormalize_world_orientations {
            pose.orientation = pose.orientation.normalize_or_identity();
        }
        pose
    }

    fn check_unit_norm(&self, frame: &Frame) {
        let norm = frame.pose().orientation.norm();
        if (norm - 1.0).abs() > self.settings.unit_norm_tolerance {
            warn!(
                "Frame `{}` has an orientation of norm {}, its rotations will be scaled",
                frame.name(),
                norm
            );
        }
    }
}
