//! Error types for the store module.

use roster_core::{ErrorKind, StudentId, ValidationError};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A student with this id is already held.
    #[error("student id {0} already exists")]
    DuplicateId(StudentId),

    /// No student with this id is held.
    #[error("student {0} not found")]
    NotFound(StudentId),

    /// A field is outside the configured limits.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// The failure tag for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::DuplicateId(_) => ErrorKind::DuplicateId,
            StoreError::NotFound(_) => ErrorKind::NotFound,
            StoreError::Validation(e) => e.kind(),
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
