use crate::TransformError;
use core::{fmt, ops::Mul};
use glam::DVec3;
use qsim_math::Quaternion;

/// Describe the placement of a frame. The pose of a frame is relative to its parent
/// frame.
///
/// * To place or move a frame, change its [`Pose`].
/// * To get the placement of a frame relative to the root, ask the
///   [`FrameManager`](crate::frame_manager::FrameManager) for its world pose.
///
/// Poses compose like transforms: `outer * inner` expresses `inner`, given in the
/// coordinates of `outer`, in the coordinates `outer` is itself expressed in.
///
/// In pseudo code:
/// ```ignore
/// (outer * inner).position    = outer.position + outer.orientation.rotate(inner.position)
/// (outer * inner).orientation = outer.orientation * inner.orientation
/// ```
///
/// [`Pose`] is `Copy`, so two frames never share a pose by identity.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    /// Orientation relative to the parent frame.
    pub orientation: Quaternion,
    /// Position relative to the parent frame.
    pub position: DVec3,
}

impl Pose {
    /// No rotation and no translation.
    pub const IDENTITY: Self = Self {
        orientation: Quaternion::IDENTITY,
        position: DVec3::ZERO,
    };

    /// A tolerance suited to [`Pose::is_equal`] on poses resolved through a few frames.
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;

    /// Creates a new [`Pose`].
    #[inline]
    pub const fn new(orientation: Quaternion, position: DVec3) -> Self {
        Self {
            orientation,
            position,
        }
    }

    /// Creates a new [`Pose`] at the position `(x, y, z)` with no rotation.
    #[inline]
    pub const fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::from_position(DVec3::new(x, y, z))
    }

    /// Creates a new [`Pose`] at `position` with no rotation.
    #[inline]
    pub const fn from_position(position: DVec3) -> Self {
        Self::new(Quaternion::IDENTITY, position)
    }

    /// Creates a new [`Pose`] at the origin with `orientation`.
    #[inline]
    pub const fn from_orientation(orientation: Quaternion) -> Self {
        Self::new(orientation, DVec3::ZERO)
    }

    /// Creates a [`Pose`] from raw component slices: `[w, x, y, z]` for the orientation
    /// and `[x, y, z]` for the position.
    ///
    /// # Errors
    ///
    /// Fails when either slice has the wrong number of components.
    pub fn try_from_slices(
        orientation: &[f64],
        position: &[f64],
    ) -> Result<Self, TransformError> {
        let orientation = Quaternion::try_from(orientation)?;
        let position: [f64; 3] = position
            .try_into()
            .map_err(|_| TransformError::InvalidPositionLength(position.len()))?;
        Ok(Self::new(orientation, DVec3::from_array(position)))
    }

    /// Returns this [`Pose`] with a new position.
    #[inline]
    #[must_use]
    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    /// Returns this [`Pose`] with a new orientation.
    #[inline]
    #[must_use]
    pub fn with_orientation(mut self, orientation: Quaternion) -> Self {
        self.orientation = orientation;
        self
    }

    /// Replaces the position.
    #[inline]
    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    /// Replaces the orientation.
    #[inline]
    pub fn set_orientation(&mut self, orientation: Quaternion) {
        self.orientation = orientation;
    }

    /// Moves the pose by `delta`, expressed in the parent frame.
    #[inline]
    pub fn translate(&mut self, delta: DVec3) {
        self.position += delta;
    }

    /// Rotates the pose by `rotation`, applied in the parent frame: the new orientation
    /// is `rotation * orientation`. The position is left unchanged.
    #[inline]
    pub fn rotate(&mut self, rotation: Quaternion) {
        self.orientation = rotation * self.orientation;
    }

    /// Expresses `inner`, given relative to this pose, relative to this pose's own
    /// parent. Same as `self * inner`.
    #[inline]
    pub fn compose(&self, inner: &Pose) -> Self {
        Self {
            position: self.transform_point(inner.position),
            orientation: self.orientation * inner.orientation,
        }
    }

    /// Returns the pose that undoes this one, so that `pose * pose.inverse()` is the
    /// identity.
    ///
    /// The position is rotated into the inverted orientation before being negated.
    #[inline]
    #[must_use]
    pub fn inverse(&self) -> Self {
        let orientation = self.orientation.inverse();
        Self {
            position: -orientation.rotate(self.position),
            orientation,
        }
    }

    /// Maps `point`, given in the coordinates of this pose, into the parent coordinates.
    #[inline]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.position + self.orientation.rotate(point)
    }

    /// Returns whether both poses place a frame at the same spot.
    ///
    /// Positions must be within `tolerance` of each other (Euclidean distance), and the
    /// orientations must describe the same rotation (see [`Quaternion::rotation_eq`]), so
    /// that `q` and `-q` compare equal.
    pub fn is_equal(&self, other: &Pose, tolerance: f64) -> bool {
        self.position.distance(other.position) <= tolerance
            && self.orientation.rotation_eq(other.orientation, tolerance)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position: {} orientation: {}",
            self.position, self.orientation
        )
    }
}

impl Mul<Pose> for Pose {
    type Output = Pose;

    fn mul(self, inner: Pose) -> Self::Output {
        self.compose(&inner)
    }
}

impl Mul<DVec3> for Pose {
    type Output = DVec3;

    fn mul(self, point: DVec3) -> Self::Output {
        self.transform_point(point)
    }
}
