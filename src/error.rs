//! Error types for ChainedSequence operations
//!
//! Three conditions are specific to sequence shape (`EmptySequence`,
//! `MultipleElements`, `UnsupportedEnvironment`); the rest report misuse at
//! construction or indexing time and are meant to be fixed by the caller.

/// Main error type for ChainedSequence operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// A terminal operation needed at least one element and saw none
    #[error("sequence is empty")]
    EmptySequence,
    /// `one()` saw two or more elements; carries the first two
    #[error("{first}, {second}")]
    MultipleElements { first: String, second: String },
    /// The forwarding mode could not be resolved for this process
    #[error("unsupported environment: {0}")]
    UnsupportedEnvironment(String),
    /// A runtime-typed value did not support iteration
    #[error("ChainedSequence expected an iterable, but '{type_name}' object is not iterable")]
    NotIterable { type_name: String },
    #[error("Expected a non-negative index; got {0}")]
    NegativeIndex(i128),
    #[error("Expected an index at most {max}; got {index}")]
    IndexTooLarge { index: i128, max: i128 },
    #[error("ChainedSequence index out of range")]
    IndexOutOfRange,
    /// An argument was outside the domain of the operation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ChainError {
    pub(crate) fn multiple<T: std::fmt::Debug>(first: &T, second: &T) -> Self {
        ChainError::MultipleElements {
            first: format!("{:?}", first),
            second: format!("{:?}", second),
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ChainError::InvalidArgument(msg.into())
    }

    /// True for the error raised when a sequence unexpectedly had no elements
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, ChainError::EmptySequence)
    }
}

/// Result type for ChainedSequence operations
pub type ChainResult<T> = Result<T, ChainError>;
