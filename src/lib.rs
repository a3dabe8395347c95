#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

//! Quaternion algebra and a resolver for trees of named reference frames.
//!
//! * [`math`] holds the [`Quaternion`](math::Quaternion) type, its interpolation
//!   routines and a few rotation matrix helpers.
//! * [`transform`] holds [`Pose`](transform::components::Pose),
//!   [`Frame`](transform::components::Frame) and the
//!   [`FrameManager`](transform::frame_manager::FrameManager) that expresses any frame, or
//!   anything attached to a frame, in any other frame.
//!
//! ```
//! use quaternion_sim::prelude::*;
//!
//! let mut frames = FrameManager::new(Frame::root("fixed"));
//! frames.add_frame(Frame::new("table", Pose::from_xyz(0.0, 0.0, 1.0), "fixed"))?;
//! frames.rotate("table", Quaternion::from_rotation_z(0.5))?;
//!
//! let cup = Solid::new("cup", Pose::from_xyz(0.2, 0.0, 0.05), "table");
//! let in_fixed = frames.pose_of(&cup, "fixed")?;
//! assert!((in_fixed.position.z - 1.05).abs() < 1e-12);
//! # Ok::<(), TransformError>(())
//! ```

pub use qsim_math as math;
pub use qsim_transform as transform;

/// `use quaternion_sim::prelude::*;` to import the common types.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{math::prelude::*, transform::prelude::*};
}
