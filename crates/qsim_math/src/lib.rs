#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

//! Provides the rotation math used by `quaternion_sim`.
//!
//! The central type is [`Quaternion`], a `(w, x, y, z)` rotation value using the
//! convention `w = cos(θ/2)` and `(x, y, z) = sin(θ/2)·axis`. Vectors and matrices are
//! the double precision types from [`glam`], re-exported here as [`DVec3`] and [`DMat3`].

mod error;
pub mod interpolation;
mod quaternion;
pub mod rotation;

pub use error::MathError;
pub use quaternion::Quaternion;

pub use glam::{DMat3, DVec3};

/// The `qsim_math` prelude.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        interpolation::{lerp, log_interpolation, nlerp, slerp},
        DMat3, DVec3, MathError, Quaternion,
    };
}
