use qsim_math::MathError;
use thiserror::Error;

/// Errors returned by the frame graph and the pose constructors.
///
/// The structural variants ([`DuplicateName`](Self::DuplicateName),
/// [`UnknownParent`](Self::UnknownParent) and [`UnknownFrame`](Self::UnknownFrame)) mean
/// the caller asked for something the graph cannot represent. They are always reported
/// and never silently ignored.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// A frame with this name is already registered.
    #[error("a frame named `{0}` is already registered")]
    DuplicateName(String),
    /// The parent of a frame being registered does not exist. The parent is empty when
    /// the frame has no parent at all.
    #[error("frame `{frame}` refers to the unknown parent frame `{parent}`")]
    UnknownParent {
        /// Name of the frame being registered.
        frame: String,
        /// Name of the missing parent.
        parent: String,
    },
    /// The named frame is not registered.
    #[error("unknown frame `{0}`")]
    UnknownFrame(String),
    /// A position was given with a number of components other than 3.
    #[error("a position needs 3 components, found {0}")]
    InvalidPositionLength(usize),
    /// A quaternion could not be built or normalized.
    #[error(transparent)]
    Math(#[from] MathError),
}
