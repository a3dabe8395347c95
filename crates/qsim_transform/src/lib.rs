#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

//! Poses, reference frames and the frame graph resolver.
//!
//! A [`FrameManager`](frame_manager::FrameManager) owns a tree of named
//! [`Frame`](components::Frame)s. Every frame stores its [`Pose`](components::Pose)
//! relative to its parent, and the manager composes those poses on demand to express any
//! frame, or any [`Attached`](components::Attached) entity, in any other frame.
//!
//! The manager caches nothing: every query re-reads the current frame poses, so mutations
//! made between two queries are always visible to the second one.

pub mod components;
pub mod depth_index;
mod error;
pub mod frame_manager;
mod settings;

pub use error::TransformError;
pub use settings::FrameSettings;

/// The `qsim_transform` prelude.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        components::{Attached, Frame, MountedSolid, Pose, Solid},
        frame_manager::{FrameManager, WorldPoses},
        FrameSettings, TransformError,
    };
}
