//! Rotation matrix helpers.

use crate::{DMat3, DVec3};

/// Rotation matrix about the x axis by `angle` radians.
pub fn rotation_x(angle: f64) -> DMat3 {
    DMat3::from_rotation_x(angle)
}

/// Rotation matrix about the y axis by `angle` radians.
pub fn rotation_y(angle: f64) -> DMat3 {
    DMat3::from_rotation_y(angle)
}

/// Rotation matrix about the z axis by `angle` radians.
pub fn rotation_z(angle: f64) -> DMat3 {
    DMat3::from_rotation_z(angle)
}

/// Rotation matrix about `axis` by `angle` radians, using Rodrigues' formula
/// `cos θ·I + sin θ·[a]× + (1 − cos θ)·a⊗a`.
///
/// `axis` is normalized first. A zero axis yields the identity.
pub fn rotation_axis_angle(axis: DVec3, angle: f64) -> DMat3 {
    let Some(axis) = axis.try_normalize() else {
        return DMat3::IDENTITY;
    };
    let (sin, cos) = angle.sin_cos();
    DMat3::IDENTITY * cos
        + cross_product_matrix(axis) * sin
        + tensor_product(axis, axis) * (1.0 - cos)
}

/// The matrix `[v]×` such that `[v]× · u = v × u`.
pub fn cross_product_matrix(v: DVec3) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(0.0, v.z, -v.y),
        DVec3::new(-v.z, 0.0, v.x),
        DVec3::new(v.y, -v.x, 0.0),
    )
}

/// The outer product `left ⊗ right`, whose element `(i, j)` is `left[i] * right[j]`.
pub fn tensor_product(left: DVec3, right: DVec3) -> DMat3 {
    DMat3::from_cols(left * right.x, left * right.y, left * right.z)
}
