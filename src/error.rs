//! Error type shared by the fallible formatters.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors raised when a formatter receives input outside its domain.
///
/// The `Display` output is exactly the message carried by the variant, so
/// callers can surface it to users unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The argument violates the function's input contract.
    #[error("{0}")]
    InvalidArgument(String),
}

impl FormatError {
    /// Build a [`FormatError::InvalidArgument`] from any message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
