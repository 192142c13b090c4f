//! Error types for Roster Core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure tag carried by an [`Outcome`](crate::Outcome).
///
/// Every domain failure a store can report maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Admission with an id already present.
    DuplicateId,
    /// Admission with an age outside the configured range.
    AgeOutOfRange,
    /// Admission or gpa update with a gpa outside the configured range.
    GpaOutOfRange,
    /// Lookup or update referencing an id the store does not hold.
    NotFound,
}

/// Core errors raised while building configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid limits: {0}")]
    InvalidLimits(String),

    #[error("gpa precision {precision} exceeds maximum of {max}")]
    InvalidPrecision { precision: u32, max: u32 },
}

/// Field validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("age {age} is out of range [{min}, {max}]")]
    AgeOutOfRange { age: u32, min: u32, max: u32 },

    #[error("gpa {gpa} is out of range [{min}, {max}]")]
    GpaOutOfRange { gpa: f64, min: f64, max: f64 },
}

impl ValidationError {
    /// The failure tag for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::AgeOutOfRange { .. } => ErrorKind::AgeOutOfRange,
            ValidationError::GpaOutOfRange { .. } => ErrorKind::GpaOutOfRange,
        }
    }
}
