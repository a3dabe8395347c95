//! Interpolation between two rotations.
//!
//! All functions take an interpolation coefficient `t`, where `t = 0` yields the start
//! rotation and `t = 1` the end rotation. Apart from [`lerp`], they normalize their inputs
//! with [`Quaternion::normalize_or_identity`].

use crate::Quaternion;
use core::f64::consts::{PI, TAU};

/// Above this absolute dot product [`slerp`] falls back to [`nlerp`].
pub const DOT_THRESHOLD: f64 = 0.9995;

/// Linear interpolation, `a·(1 − t) + b·t`.
///
/// The result is not renormalized.
#[inline]
pub fn lerp(start: Quaternion, end: Quaternion, t: f64) -> Quaternion {
    start * (1.0 - t) + end * t
}

/// Normalized linear interpolation: [`lerp`] followed by a normalization.
#[inline]
pub fn nlerp(start: Quaternion, end: Quaternion, t: f64) -> Quaternion {
    lerp(start, end, t).normalize_or_identity()
}

/// Spherical linear interpolation.
///
/// When `shortest_path` is set and the inputs lie in opposite hemispheres, `end` is
/// negated so the interpolation takes the shorter arc. Nearly parallel inputs use
/// [`nlerp`] instead.
pub fn slerp(start: Quaternion, end: Quaternion, t: f64, shortest_path: bool) -> Quaternion {
    let start = start.normalize_or_identity();
    let mut end = end.normalize_or_identity();
    let mut dot = start.dot(end);

    if dot.abs() > DOT_THRESHOLD {
        return nlerp(start, end, t);
    }

    if shortest_path && dot < 0.0 {
        dot = -dot;
        end = -end;
    }

    let dot = dot.clamp(-1.0, 1.0);
    let delta_angle = dot.acos() * t;

    // component of `end` orthogonal to `start`, in the plane they span
    let orthogonal = (end - start * dot).normalize_or_identity();

    let (sin, cos) = delta_angle.sin_cos();
    orthogonal * sin + start * cos
}

/// Logarithmic interpolation.
///
/// The relative rotation `end * start⁻¹` has its angle scaled by `t` and is then applied
/// to `start`. With `shortest_path`, an angle above `π` is wrapped into `(−π, π]` first.
pub fn log_interpolation(
    start: Quaternion,
    end: Quaternion,
    t: f64,
    shortest_path: bool,
) -> Quaternion {
    let start = start.normalize_or_identity();
    let end = end.normalize_or_identity();

    let delta = end * start.inverse();
    let mut angle = delta.angle();
    if shortest_path && angle.abs() > PI {
        angle -= angle.signum() * TAU;
    }

    Quaternion::from_axis_angle(delta.axis(), angle * t) * start
}
