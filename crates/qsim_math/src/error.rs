use thiserror::Error;

/// Errors produced by the quaternion constructors and normalization.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A quaternion with a (numerically) zero norm was explicitly normalized.
    #[error("cannot normalize a zero quaternion")]
    ZeroQuaternion,
    /// A rotation was requested between two zero vectors.
    #[error("cannot build a rotation between two zero vectors")]
    ZeroVectors,
    /// A slice had the wrong number of components.
    #[error("expected {expected} components, found {found}")]
    InvalidLength {
        /// The number of components the constructor requires.
        expected: usize,
        /// The number of components that were given.
        found: usize,
    },
}

impl MathError {
    /// Returns `true` for the errors caused by a degenerate value (a zero quaternion or
    /// zero vectors), as opposed to a malformed input.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, MathError::ZeroQuaternion | MathError::ZeroVectors)
    }
}
