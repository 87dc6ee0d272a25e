//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is local and recoverable: store operations return these to the
/// calling action handler and never leave partially-applied state behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The addressed record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A numeric update would leave a value outside its allowed range.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn out_of_bounds(msg: impl Into<String>) -> Self {
        Self::OutOfBounds(msg.into())
    }

    /// True for the `NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
