//! Strong type definitions for Roster.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A caller-supplied student identifier.
///
/// Unique across a store for the lifetime of that store. Serialized as a
/// bare integer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u64);

impl StudentId {
    /// Create a new StudentId.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StudentId({})", self.0)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StudentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_display() {
        assert_eq!(format!("{}", StudentId::new(42)), "42");
    }

    #[test]
    fn test_student_id_debug() {
        assert_eq!(format!("{:?}", StudentId::new(7)), "StudentId(7)");
    }

    #[test]
    fn test_student_id_serializes_as_integer() {
        let json = serde_json::to_string(&StudentId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
