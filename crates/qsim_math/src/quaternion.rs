use crate::MathError;
use core::{
    f64::consts::PI,
    fmt,
    ops::{Add, Mul, MulAssign, Neg, Sub},
};
use glam::{DMat3, DVec3};

/// Norms at or below this value are treated as zero.
const ZERO_NORM_EPSILON: f64 = 1e-8;

/// A rotation value with components `(w, x, y, z)`.
///
/// This quaternion uses the convention `w = cos(θ/2)` and `(x, y, z) = sin(θ/2)·axis`.
/// Only a unit quaternion represents a valid rotation, but nothing here normalizes
/// implicitly: every algebraic operation preserves the raw 4-tuple. Use
/// [`Quaternion::normalize`] (strict) or [`Quaternion::normalize_or_identity`] (safe)
/// when drift matters.
///
/// ## Equality
///
/// There are two notions of equality:
///
/// * component-wise: [`PartialEq`] (exact) and [`Quaternion::abs_diff_eq`]
///   (within a tolerance),
/// * as rotations: [`Quaternion::rotation_eq`], which compares rotation matrices so that
///   `q` and `-q` are considered equal. Pose equality is built on this one.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    /// Scalar part, `cos(θ/2)` for a rotation.
    pub w: f64,
    /// First component of the vector part.
    pub x: f64,
    /// Second component of the vector part.
    pub y: f64,
    /// Third component of the vector part.
    pub z: f64,
}

impl Quaternion {
    /// The identity rotation `(1, 0, 0, 0)`.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// All zeros. Not a rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from raw components.
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a quaternion from `[w, x, y, z]`.
    #[inline]
    pub const fn from_array(array: [f64; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }

    /// Returns `[w, x, y, z]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Creates a quaternion from a scalar part and a vector part.
    #[inline]
    pub fn from_scalar_vector(w: f64, vector: DVec3) -> Self {
        Self::new(w, vector.x, vector.y, vector.z)
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub fn vector(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Creates a rotation of `angle` radians about `axis`.
    ///
    /// `axis` does not need to be normalized. A zero axis yields [`Quaternion::IDENTITY`]
    /// whatever the angle.
    pub fn from_axis_angle(axis: DVec3, angle: f64) -> Self {
        let Some(axis) = axis.try_normalize() else {
            return Self::IDENTITY;
        };
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::from_scalar_vector(cos, axis * sin)
    }

    /// Creates a rotation of `angle` radians about the x axis.
    #[inline]
    pub fn from_rotation_x(angle: f64) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(cos, sin, 0.0, 0.0)
    }

    /// Creates a rotation of `angle` radians about the y axis.
    #[inline]
    pub fn from_rotation_y(angle: f64) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(cos, 0.0, sin, 0.0)
    }

    /// Creates a rotation of `angle` radians about the z axis.
    #[inline]
    pub fn from_rotation_z(angle: f64) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(cos, 0.0, 0.0, sin)
    }

    /// Creates the rotation that maps the direction of `from` onto the direction of `to`.
    ///
    /// The axis is `from × to` and the angle `atan2(|from × to|, from · to)`, which stays
    /// accurate near `0` and `π`. Anti-parallel inputs rotate by `π` about an axis
    /// orthogonal to `from`. If exactly one input is zero the result is the identity.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroVectors`] if both vectors are zero.
    pub fn from_two_vectors(from: DVec3, to: DVec3) -> Result<Self, MathError> {
        if from.length() <= ZERO_NORM_EPSILON && to.length() <= ZERO_NORM_EPSILON {
            return Err(MathError::ZeroVectors);
        }

        let axis = from.cross(to);
        let dot = from.dot(to);
        let axis_length = axis.length();

        if axis_length <= ZERO_NORM_EPSILON * from.length() * to.length() && dot < 0.0 {
            let orthogonal = from.normalize().any_orthonormal_vector();
            return Ok(Self::from_axis_angle(orthogonal, PI));
        }

        Ok(Self::from_axis_angle(axis, axis_length.atan2(dot)))
    }

    /// Creates a rotation from aerospace (intrinsic Z-Y-X) Euler angles in radians.
    ///
    /// The result is `q_z(yaw) * q_y(pitch) * q_x(roll)`.
    pub fn from_euler(roll: f64, pitch: f64, yaw: f64) -> Self {
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sy, cy) = (yaw * 0.5).sin_cos();

        Self::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        )
    }

    /// Returns the aerospace Euler angles `(roll, pitch, yaw)` in radians.
    ///
    /// Inverse of [`Quaternion::from_euler`] for `|pitch| < π/2`. At gimbal lock the
    /// split between roll and yaw is arbitrary.
    pub fn to_euler(&self) -> (f64, f64, f64) {
        let Self { w, x, y, z } = self.normalize_or_identity();

        let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
        let pitch = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0).asin();
        let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));

        (roll, pitch, yaw)
    }

    /// Four-dimensional dot product.
    #[inline]
    pub fn dot(&self, rhs: Self) -> f64 {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Squared Euclidean norm of the 4-tuple.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Euclidean norm of the 4-tuple.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns whether the norm is 1 up to a small tolerance.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        (self.norm_squared() - 1.0).abs() <= 1e-9
    }

    /// Divides this quaternion by its norm, in place.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroQuaternion`] and leaves `self` untouched when the norm is
    /// numerically zero.
    pub fn normalize(&mut self) -> Result<(), MathError> {
        *self = self.try_normalized()?;
        Ok(())
    }

    /// Returns this quaternion divided by its norm.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroQuaternion`] when the norm is numerically zero.
    pub fn try_normalized(&self) -> Result<Self, MathError> {
        let norm = self.norm();
        if norm <= ZERO_NORM_EPSILON || !norm.is_finite() {
            return Err(MathError::ZeroQuaternion);
        }
        Ok(*self * norm.recip())
    }

    /// Returns this quaternion divided by its norm, or [`Quaternion::IDENTITY`] when the
    /// norm is numerically zero.
    ///
    /// This is the normalization used by the interpolation functions.
    #[inline]
    pub fn normalize_or_identity(&self) -> Self {
        self.try_normalized().unwrap_or(Self::IDENTITY)
    }

    /// Returns the conjugate, which is the inverse rotation for a unit quaternion.
    ///
    /// The result is not renormalized.
    #[inline]
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Replaces this quaternion with its conjugate, see [`Quaternion::inverse`].
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Rotation axis, the normalized vector part.
    ///
    /// The axis of a rotation with a zero vector part is undefined; [`DVec3::X`] is
    /// returned instead.
    #[inline]
    pub fn axis(&self) -> DVec3 {
        self.vector().try_normalize().unwrap_or(DVec3::X)
    }

    /// Rotation angle in radians, `2·atan2(|v|, w)`, in `[0, 2π]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        2.0 * self.vector().length().atan2(self.w)
    }

    /// Rotation angle in degrees.
    #[inline]
    pub fn angle_degrees(&self) -> f64 {
        self.angle().to_degrees()
    }

    /// Returns the rotation axis and angle (radians).
    #[inline]
    pub fn to_axis_angle(&self) -> (DVec3, f64) {
        (self.axis(), self.angle())
    }

    /// Quaternion logarithm, the pure quaternion `(0, θ·axis)`.
    pub fn log(&self) -> Self {
        Self::from_scalar_vector(0.0, self.axis() * self.angle())
    }

    /// Returns the 3×3 rotation matrix of this quaternion.
    ///
    /// The closed form is scaled by `2/|q|²` so that it is a pure rotation even when the
    /// quaternion drifted away from unit length. A zero vector part is returned as the
    /// identity matrix directly.
    pub fn to_rotation_matrix(&self) -> DMat3 {
        if self.vector() == DVec3::ZERO {
            return DMat3::IDENTITY;
        }

        let Self { w, x, y, z } = *self;
        let s = 2.0 / self.norm_squared();

        let (xx, yy, zz) = (x * x * s, y * y * s, z * z * s);
        let (xy, xz, yz) = (x * y * s, x * z * s, y * z * s);
        let (wx, wy, wz) = (w * x * s, w * y * s, w * z * s);

        DMat3::from_cols(
            DVec3::new(1.0 - (yy + zz), xy + wz, xz - wy),
            DVec3::new(xy - wz, 1.0 - (xx + zz), yz + wx),
            DVec3::new(xz + wy, yz - wx, 1.0 - (xx + yy)),
        )
    }

    /// Rotates `vector` by this quaternion, `q v q⁻¹`.
    ///
    /// Like [`Quaternion::to_rotation_matrix`], the result does not depend on the norm of
    /// the quaternion.
    pub fn rotate(&self, vector: DVec3) -> DVec3 {
        let u = self.vector();
        if u == DVec3::ZERO {
            return vector;
        }

        let w = self.w;
        let rotated =
            vector * (w * w - u.dot(u)) + 2.0 * u.dot(vector) * u + 2.0 * w * u.cross(vector);
        rotated / self.norm_squared()
    }

    /// Component-wise comparison within `max_abs_diff`.
    ///
    /// `q` and `-q` are *not* equal under this comparison, see
    /// [`Quaternion::rotation_eq`].
    #[inline]
    pub fn abs_diff_eq(&self, rhs: Self, max_abs_diff: f64) -> bool {
        self.to_array()
            .iter()
            .zip(rhs.to_array())
            .all(|(a, b)| (a - b).abs() <= max_abs_diff)
    }

    /// Returns whether both quaternions describe the same rotation, by comparing their
    /// rotation matrices element-wise within `max_abs_diff`.
    #[inline]
    pub fn rotation_eq(&self, rhs: Self, max_abs_diff: f64) -> bool {
        self.to_rotation_matrix()
            .abs_diff_eq(rhs.to_rotation_matrix(), max_abs_diff)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.w, self.x, self.y, self.z)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(array: [f64; 4]) -> Self {
        Self::from_array(array)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(quat: Quaternion) -> Self {
        quat.to_array()
    }
}

impl TryFrom<&[f64]> for Quaternion {
    type Error = MathError;

    fn try_from(slice: &[f64]) -> Result<Self, Self::Error> {
        let array: [f64; 4] = slice.try_into().map_err(|_| MathError::InvalidLength {
            expected: 4,
            found: slice.len(),
        })?;
        Ok(Self::from_array(array))
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;

    /// Hamilton product. `outer * inner` applies `inner` first, then `outer`.
    fn mul(self, rhs: Quaternion) -> Self::Output {
        let (lv, rv) = (self.vector(), rhs.vector());
        let w = self.w * rhs.w - lv.dot(rv);
        let v = self.w * rv + rhs.w * lv + lv.cross(rv);
        Self::from_scalar_vector(w, v)
    }
}

impl MulAssign<Quaternion> for Quaternion {
    fn mul_assign(&mut self, rhs: Quaternion) {
        *self = *self * rhs;
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Self::Output {
        rhs * self
    }
}

impl Mul<DVec3> for Quaternion {
    type Output = DVec3;

    fn mul(self, rhs: DVec3) -> Self::Output {
        self.rotate(rhs)
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;

    fn add(self, rhs: Quaternion) -> Self::Output {
        Self::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Quaternion) -> Self::Output {
        Self::new(
            self.w - rhs.w,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};
    use glam::DQuat;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_unit(rng: &mut impl Rng) -> Quaternion {
        let axis = DVec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        Quaternion::from_axis_angle(axis, rng.random_range(-PI..PI))
    }

    #[test]
    fn neg() {
        let quat = -Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(quat, Quaternion::new(-1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn invert_in_place() {
        let mut quat = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        quat.invert();
        assert_eq!(quat, Quaternion::new(1.0, -2.0, -3.0, -4.0));
        // no renormalization
        assert_eq!(quat.inverse(), Quaternion::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn hamilton_product_units() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);

        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, -Quaternion::IDENTITY);
    }

    #[test]
    fn product_with_inverse_is_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let q = random_unit(&mut rng);
            assert!((q * q.inverse()).rotation_eq(Quaternion::IDENTITY, 1e-12));
            assert!((q.inverse() * q).rotation_eq(Quaternion::IDENTITY, 1e-12));
        }
    }

    #[test]
    fn rotation_matrix_is_multiplicative() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let q1 = random_unit(&mut rng) * rng.random_range(0.5..2.0);
            let q2 = random_unit(&mut rng);
            assert_abs_diff_eq!(
                (q1 * q2).to_rotation_matrix(),
                q1.to_rotation_matrix() * q2.to_rotation_matrix(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn rotation_matrix_matches_glam() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let q = random_unit(&mut rng);
            let expected = DMat3::from_quat(DQuat::from_xyzw(q.x, q.y, q.z, q.w));
            assert!(q.to_rotation_matrix().abs_diff_eq(expected, 1e-12));
        }
    }

    #[test]
    fn identity_rotation_matrix() {
        assert_eq!(Quaternion::IDENTITY.to_rotation_matrix(), DMat3::IDENTITY);
        assert_eq!((-Quaternion::IDENTITY).to_rotation_matrix(), DMat3::IDENTITY);
        assert_eq!(Quaternion::ZERO.to_rotation_matrix(), DMat3::IDENTITY);
    }

    #[test]
    fn rotate_vector() {
        let qz = Quaternion::from_rotation_z(FRAC_PI_2);
        assert!((qz * DVec3::X).abs_diff_eq(DVec3::Y, 1e-12));
        assert!((-qz * DVec3::X).abs_diff_eq(DVec3::Y, 1e-12));
        assert!((qz * DVec3::Y).abs_diff_eq(-DVec3::X, 1e-12));

        let qx = Quaternion::from_rotation_x(FRAC_PI_2);
        assert!((qx * DVec3::Y).abs_diff_eq(DVec3::Z, 1e-12));
        assert!((qx * DVec3::X).abs_diff_eq(DVec3::X, 1e-12));

        // scale does not leak into the rotated vector
        let scaled = qx * 3.0;
        assert!((scaled * DVec3::Y).abs_diff_eq(DVec3::Z, 1e-12));

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let q = random_unit(&mut rng);
        let v = DVec3::new(0.3, -1.2, 2.5);
        assert!((q * v).abs_diff_eq(q.to_rotation_matrix() * v, 1e-12));
    }

    #[test]
    fn axis_and_angle() {
        let q = Quaternion::from_axis_angle(DVec3::new(0.0, 2.0, 0.0), FRAC_PI_4);
        let (axis, angle) = q.to_axis_angle();
        assert!(axis.abs_diff_eq(DVec3::Y, 1e-12));
        assert_abs_diff_eq!(angle, FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(q.angle_degrees(), 45.0, epsilon = 1e-10);

        // undefined axis falls back to x
        let (axis, angle) = Quaternion::IDENTITY.to_axis_angle();
        assert_eq!(axis, DVec3::X);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn zero_axis_is_identity() {
        assert_eq!(
            Quaternion::from_axis_angle(DVec3::ZERO, 1.3),
            Quaternion::IDENTITY
        );
    }

    #[test]
    fn principal_axes_match_axis_angle() {
        let angle = 0.7;
        assert!(
            Quaternion::from_rotation_x(angle)
                .abs_diff_eq(Quaternion::from_axis_angle(DVec3::X, angle), 1e-15)
        );
        assert!(
            Quaternion::from_rotation_y(angle)
                .abs_diff_eq(Quaternion::from_axis_angle(DVec3::Y, angle), 1e-15)
        );
        assert!(
            Quaternion::from_rotation_z(angle)
                .abs_diff_eq(Quaternion::from_axis_angle(DVec3::Z, angle), 1e-15)
        );
    }

    #[test]
    fn normalize() {
        let mut q = Quaternion::new(0.0, 3.0, 0.0, 4.0);
        q.normalize().unwrap();
        assert!(q.abs_diff_eq(Quaternion::new(0.0, 0.6, 0.0, 0.8), 1e-15));
        assert!(q.is_normalized());

        let mut zero = Quaternion::ZERO;
        assert_eq!(zero.normalize(), Err(MathError::ZeroQuaternion));
        assert_eq!(zero, Quaternion::ZERO);
        assert_eq!(zero.normalize_or_identity(), Quaternion::IDENTITY);
        assert!(MathError::ZeroQuaternion.is_degenerate());
    }

    #[test]
    fn two_vectors() {
        let q = Quaternion::from_two_vectors(DVec3::X, DVec3::Y).unwrap();
        assert!(q.rotation_eq(Quaternion::from_rotation_z(FRAC_PI_2), 1e-12));

        let from = DVec3::new(1.0, 2.0, -0.5);
        let to = DVec3::new(-3.0, 0.5, 1.0);
        let q = Quaternion::from_two_vectors(from, to).unwrap();
        assert!((q * from.normalize()).abs_diff_eq(to.normalize(), 1e-12));

        let same = Quaternion::from_two_vectors(DVec3::Z, DVec3::Z * 4.0).unwrap();
        assert!(same.rotation_eq(Quaternion::IDENTITY, 1e-12));

        let opposite = Quaternion::from_two_vectors(DVec3::Z, -DVec3::Z).unwrap();
        assert!((opposite * DVec3::Z).abs_diff_eq(-DVec3::Z, 1e-12));

        assert_eq!(
            Quaternion::from_two_vectors(DVec3::ZERO, DVec3::ZERO),
            Err(MathError::ZeroVectors)
        );
        assert_eq!(
            Quaternion::from_two_vectors(DVec3::ZERO, DVec3::X),
            Ok(Quaternion::IDENTITY)
        );
    }

    #[test]
    fn euler_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..200 {
            let roll = rng.random_range(-PI + 1e-3..PI - 1e-3);
            let pitch = rng.random_range(-FRAC_PI_2 + 1e-3..FRAC_PI_2 - 1e-3);
            let yaw = rng.random_range(-PI + 1e-3..PI - 1e-3);

            let (r, p, y) = Quaternion::from_euler(roll, pitch, yaw).to_euler();
            assert_abs_diff_eq!(r, roll, epsilon = 1e-9);
            assert_abs_diff_eq!(p, pitch, epsilon = 1e-9);
            assert_abs_diff_eq!(y, yaw, epsilon = 1e-9);
        }
    }

    #[test]
    fn euler_is_zyx() {
        let (roll, pitch, yaw) = (0.3, -0.4, 1.1);
        let composed = Quaternion::from_rotation_z(yaw)
            * Quaternion::from_rotation_y(pitch)
            * Quaternion::from_rotation_x(roll);
        assert!(Quaternion::from_euler(roll, pitch, yaw).abs_diff_eq(composed, 1e-15));
    }

    #[test]
    fn log_is_pure() {
        let q = Quaternion::from_rotation_y(1.2);
        let log = q.log();
        assert_eq!(log.w, 0.0);
        assert!(log.vector().abs_diff_eq(DVec3::Y * 1.2, 1e-12));
    }

    #[test]
    fn rotation_equality_accounts_for_double_cover() {
        let q = Quaternion::from_euler(0.1, 0.2, 0.3);
        assert!(q.rotation_eq(-q, 1e-12));
        assert!(!q.abs_diff_eq(-q, 1e-12));
        assert!(!q.rotation_eq(Quaternion::IDENTITY, 1e-6));
    }

    #[test]
    fn from_slice() {
        let values = [1.0, 0.0, 0.0, 0.0];
        assert_eq!(
            Quaternion::try_from(&values[..]),
            Ok(Quaternion::IDENTITY)
        );
        assert_eq!(
            Quaternion::try_from(&values[..3]),
            Err(MathError::InvalidLength {
                expected: 4,
                found: 3
            })
        );
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn ron_round_trip() {
        let q = Quaternion::from_rotation_x(0.5);
        let text = ron::to_string(&q).unwrap();
        let back: Quaternion = ron::from_str(&text).unwrap();
        assert_eq!(q, back);
    }
}
