use super::{Frame, Pose};
use crate::{frame_manager::FrameManager, TransformError};
use glam::DVec3;
use qsim_math::Quaternion;

/// Something placed in the frame graph without being a frame itself.
///
/// [`FrameManager::pose_of`](crate::frame_manager::FrameManager::pose_of) accepts any
/// implementor and expresses it in any registered frame.
pub trait Attached {
    /// Pose of the entity relative to its [attachment frame](Attached::attachment_frame).
    fn local_pose(&self) -> Pose;

    /// Name of the frame the entity is attached to.
    fn attachment_frame(&self) -> &str;
}

impl<T: Attached + ?Sized> Attached for &T {
    #[inline]
    fn local_pose(&self) -> Pose {
        (**self).local_pose()
    }

    #[inline]
    fn attachment_frame(&self) -> &str {
        (**self).attachment_frame()
    }
}

/// A rigid body attached to a reference frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Solid {
    name: String,
    pose: Pose,
    initial_pose: Pose,
    ref_frame: String,
}

impl Solid {
    /// Creates a solid placed at `pose` relative to the frame named `ref_frame`.
    pub fn new(name: impl Into<String>, pose: Pose, ref_frame: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pose,
            initial_pose: pose,
            ref_frame: ref_frame.into(),
        }
    }

    /// Name of the solid.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current pose, relative to the reference frame.
    #[inline]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// The pose the solid was created with.
    #[inline]
    pub fn initial_pose(&self) -> &Pose {
        &self.initial_pose
    }

    /// Name of the reference frame.
    #[inline]
    pub fn ref_frame(&self) -> &str {
        &self.ref_frame
    }

    /// Moves the solid by `delta`, expressed in the reference frame.
    #[inline]
    pub fn translate(&mut self, delta: DVec3) {
        self.pose.translate(delta);
    }

    /// Rotates the solid by `rotation`, applied in the reference frame.
    #[inline]
    pub fn rotate(&mut self, rotation: Quaternion) {
        self.pose.rotate(rotation);
    }

    /// Replaces the pose.
    #[inline]
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Replaces the position.
    #[inline]
    pub fn set_position(&mut self, position: DVec3) {
        self.pose.set_position(position);
    }

    /// Replaces the orientation.
    #[inline]
    pub fn set_orientation(&mut self, orientation: Quaternion) {
        self.pose.set_orientation(orientation);
    }

    /// Restores the pose the solid was created with.
    #[inline]
    pub fn reset_pose(&mut self) {
        self.pose = self.initial_pose;
    }

    /// Name of the frame created by [`Solid::mount`], `frame_<name>`.
    pub fn frame_name(&self) -> String {
        format!("frame_{}", self.name)
    }

    /// Moves the solid into `manager`, as a frame named `frame_<name>` placed under the
    /// reference frame.
    ///
    /// From then on the pose lives in that frame only, and the returned [`MountedSolid`]
    /// moves it through the manager. Frames and entities attached to `frame_<name>`
    /// follow every move. The frame is reset to the solid's initial pose.
    ///
    /// # Errors
    ///
    /// Fails like [`FrameManager::add_frame`], when `frame_<name>` is taken or the
    /// reference frame is unknown.
    pub fn mount(self, manager: &mut FrameManager) -> Result<MountedSolid, TransformError> {
        let frame_name = self.frame_name();
        let mut frame = Frame::new(frame_name.clone(), self.initial_pose, self.ref_frame);
        frame.set_pose(self.pose);
        manager.add_frame(frame)?;

        Ok(MountedSolid {
            name: self.name,
            frame: frame_name,
        })
    }
}

impl Attached for Solid {
    #[inline]
    fn local_pose(&self) -> Pose {
        self.pose
    }

    #[inline]
    fn attachment_frame(&self) -> &str {
        &self.ref_frame
    }
}

/// A [`Solid`] whose pose is stored in its own frame of a [`FrameManager`].
///
/// Created by [`Solid::mount`]. The solid sits at the origin of its frame, so its
/// [local pose](Attached::local_pose) is the identity and moving it means moving the
/// frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct MountedSolid {
    name: String,
    frame: String,
}

impl MountedSolid {
    /// Name of the solid.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the frame holding the solid's pose.
    #[inline]
    pub fn frame_name(&self) -> &str {
        &self.frame
    }

    /// Current pose, relative to the reference frame the solid was mounted under.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if `manager` is not the one the solid was
    /// mounted into.
    pub fn pose<'a>(&self, manager: &'a FrameManager) -> Result<&'a Pose, TransformError> {
        manager
            .frame(&self.frame)
            .map(Frame::pose)
            .ok_or_else(|| TransformError::UnknownFrame(self.frame.clone()))
    }

    /// Moves the solid by `delta`, expressed in its reference frame.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if the solid's frame is not in `manager`.
    pub fn translate(
        &self,
        manager: &mut FrameManager,
        delta: DVec3,
    ) -> Result<(), TransformError> {
        manager.translate(&self.frame, delta)
    }

    /// Rotates the solid by `rotation`, applied in its reference frame.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if the solid's frame is not in `manager`.
    pub fn rotate(
        &self,
        manager: &mut FrameManager,
        rotation: Quaternion,
    ) -> Result<(), TransformError> {
        manager.rotate(&self.frame, rotation)
    }

    /// Replaces the pose.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if the solid's frame is not in `manager`.
    pub fn set_pose(&self, manager: &mut FrameManager, pose: Pose) -> Result<(), TransformError> {
        manager.set_pose(&self.frame, pose)
    }

    /// Restores the initial pose of the solid.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownFrame`] if the solid's frame is not in `manager`.
    pub fn reset_pose(&self, manager: &mut FrameManager) -> Result<(), TransformError> {
        manager.reset_pose(&self.frame)
    }
}

impl Attached for MountedSolid {
    #[inline]
    fn local_pose(&self) -> Pose {
        Pose::IDENTITY
    }

    #[inline]
    fn attachment_frame(&self) -> &str {
        &self.frame
    }
}
