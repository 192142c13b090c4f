//! Student: the single record type held by a store.

use serde::{Deserialize, Serialize};

use crate::types::StudentId;

/// A student record.
///
/// Plain data with no invariants of its own; the store that admits it is
/// responsible for checking the id and the value ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: u32,
    pub major: String,
    pub active: bool,
    pub gpa: f64,
}

impl Student {
    /// Create a new student record.
    pub fn new(
        id: impl Into<StudentId>,
        name: impl Into<String>,
        age: u32,
        major: impl Into<String>,
        active: bool,
        gpa: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            major: major.into(),
            active,
            gpa,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_json_shape() {
        let student = Student::new(1, "Ana", 20, "Engineering", true, 8.5);
        let value = serde_json::to_value(&student).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Ana");
        assert_eq!(value["age"], 20);
        assert_eq!(value["major"], "Engineering");
        assert_eq!(value["active"], true);
        assert_eq!(value["gpa"], 8.5);
    }
}
