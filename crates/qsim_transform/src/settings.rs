/// Settings of a [`FrameManager`](crate::frame_manager::FrameManager).
///
/// ```
/// # use qsim_transform::{components::Frame, frame_manager::FrameManager, FrameSettings};
/// let settings = FrameSettings {
///     renormalize_world_orientations: true,
///     ..Default::default()
/// };
/// let manager = FrameManager::with_settings(Frame::root("fixed"), settings);
/// assert!(manager.settings().renormalize_world_orientations);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FrameSettings {
    /// A frame whose orientation norm differs from 1 by more than this is reported with a
    /// warning when it is registered.
    pub unit_norm_tolerance: f64,
    /// Renormalize every composed orientation while resolving poses. Keeps long frame
    /// chains from drifting away from unit quaternions.
    pub renormalize_world_orientations: bool,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            unit_norm_tolerance: 1e-6,
            renormalize_world_orientations: false,
        }
    }
}
