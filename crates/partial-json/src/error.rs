use thiserror::Error;

/// Errors raised by the completion engine itself.
///
/// These are distinct from [`crate::DecodeError`], which layers UTF-8 and
/// decoder failures on top of this taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// A non-conforming numeric literal (`Infinity`, `-Infinity`, `NaN`) was
    /// encountered while [`crate::FloatPolicy::Reject`] is in effect.
    #[error("non-conforming numeric literal {0:?} encountered under the Reject float policy")]
    InvalidValue(String),

    /// Completing this value would require recursing into a nested array or
    /// object at or beyond [`crate::CompleterOptions::maximum_depth`].
    #[error("recursion depth {depth} would exceed the configured maximum of {limit}")]
    DepthLimitExceeded { depth: usize, limit: usize },
}
