use super::Pose;
use glam::DVec3;
use qsim_math::Quaternion;

/// A named reference frame, placed relative to a named parent frame.
///
/// The root ("fixed") frame has no parent. Every other frame refers to its parent by
/// name, and the [`FrameManager`](crate::frame_manager::FrameManager) checks that the
/// parent exists when the frame is registered. Name and parent never change after
/// construction; only the pose can be mutated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    name: String,
    pose: Pose,
    initial_pose: Pose,
    parent: Option<String>,
}

impl Frame {
    /// Creates a frame placed at `pose` relative to the frame named `parent`.
    pub fn new(name: impl Into<String>, pose: Pose, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pose,
            initial_pose: pose,
            parent: Some(parent.into()),
        }
    }

    /// Creates a root frame with the identity pose.
    pub fn root(name: impl Into<String>) -> Self {
        Self::root_with_pose(name, Pose::IDENTITY)
    }

    /// Creates a root frame with the given pose.
    pub fn root_with_pose(name: impl Into<String>, pose: Pose) -> Self {
        Self {
            name: name.into(),
            pose,
            initial_pose: pose,
            parent: None,
        }
    }

    /// Name of the frame.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the parent frame, `None` for a root.
    #[inline]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Returns `true` if the frame has no parent.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Current pose, relative to the parent frame.
    #[inline]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// The pose the frame was created with, restored by [`Frame::reset_pose`].
    #[inline]
    pub fn initial_pose(&self) -> &Pose {
        &self.initial_pose
    }

    /// Moves the frame by `delta`, expressed in the parent frame.
    #[inline]
    pub fn translate(&mut self, delta: DVec3) {
        self.pose.translate(delta);
    }

    /// Rotates the frame by `rotation`, applied in the parent frame.
    #[inline]
    pub fn rotate(&mut self, rotation: Quaternion) {
        self.pose.rotate(rotation);
    }

    /// Replaces the pose.
    #[inline]
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Restores the pose the frame was created with.
    #[inline]
    pub fn reset_pose(&mut self) {
        self.pose = self.initial_pose;
    }

    pub(crate) fn detach(&mut self) -> Option<String> {
        self.parent.take()
    }
}
