//! Field validation: the value ranges every stored student must satisfy.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::student::Student;

/// Minimum admissible age (inclusive).
pub const MIN_AGE: u32 = 15;

/// Maximum admissible age (inclusive).
pub const MAX_AGE: u32 = 80;

/// Minimum admissible gpa (inclusive).
pub const MIN_GPA: f64 = 0.0;

/// Maximum admissible gpa (inclusive).
pub const MAX_GPA: f64 = 10.0;

/// Inclusive value ranges enforced by a store.
///
/// Only constructed through [`Limits::new`], [`Default`], or deserialization,
/// which runs the same checks as `new`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLimits")]
pub struct Limits {
    min_age: u32,
    max_age: u32,
    min_gpa: f64,
    max_gpa: f64,
}

/// Unchecked wire form of [`Limits`].
#[derive(Deserialize)]
struct RawLimits {
    min_age: u32,
    max_age: u32,
    min_gpa: f64,
    max_gpa: f64,
}

impl TryFrom<RawLimits> for Limits {
    type Error = CoreError;

    fn try_from(raw: RawLimits) -> Result<Self, Self::Error> {
        Limits::new(raw.min_age, raw.max_age, raw.min_gpa, raw.max_gpa)
    }
}

impl Limits {
    /// Create limits, rejecting empty or non-finite ranges.
    pub fn new(min_age: u32, max_age: u32, min_gpa: f64, max_gpa: f64) -> Result<Self, CoreError> {
        if min_age > max_age {
            return Err(CoreError::InvalidLimits(format!(
                "min_age {min_age} exceeds max_age {max_age}"
            )));
        }
        if !min_gpa.is_finite() || !max_gpa.is_finite() {
            return Err(CoreError::InvalidLimits("gpa bounds must be finite".into()));
        }
        if min_gpa > max_gpa {
            return Err(CoreError::InvalidLimits(format!(
                "min_gpa {min_gpa} exceeds max_gpa {max_gpa}"
            )));
        }

        Ok(Self {
            min_age,
            max_age,
            min_gpa,
            max_gpa,
        })
    }

    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    pub fn min_gpa(&self) -> f64 {
        self.min_gpa
    }

    pub fn max_gpa(&self) -> f64 {
        self.max_gpa
    }

    /// Whether `age` lies within the age range.
    pub fn age_in_range(&self, age: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }

    /// Whether `gpa` lies within the gpa range. NaN never does.
    pub fn gpa_in_range(&self, gpa: f64) -> bool {
        (self.min_gpa..=self.max_gpa).contains(&gpa)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_age: MIN_AGE,
            max_age: MAX_AGE,
            min_gpa: MIN_GPA,
            max_gpa: MAX_GPA,
        }
    }
}

/// Check an age against the limits.
pub fn validate_age(age: u32, limits: &Limits) -> Result<(), ValidationError> {
    if limits.age_in_range(age) {
        Ok(())
    } else {
        Err(ValidationError::AgeOutOfRange {
            age,
            min: limits.min_age,
            max: limits.max_age,
        })
    }
}

/// Check a gpa against the limits.
pub fn validate_gpa(gpa: f64, limits: &Limits) -> Result<(), ValidationError> {
    if limits.gpa_in_range(gpa) {
        Ok(())
    } else {
        Err(ValidationError::GpaOutOfRange {
            gpa,
            min: limits.min_gpa,
            max: limits.max_gpa,
        })
    }
}

/// Validate every ranged field of a student.
///
/// Age is checked before gpa, so a record with both fields out of range
/// reports the age failure.
pub fn validate_student(student: &Student, limits: &Limits) -> Result<(), ValidationError> {
    validate_age(student.age, limits)?;
    validate_gpa(student.gpa, limits)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn student(age: u32, gpa: f64) -> Student {
        Student::new(1, "Ana", age, "Engineering", true, gpa)
    }

    #[test]
    fn test_age_bounds_inclusive() {
        let limits = Limits::default();
        assert!(validate_age(15, &limits).is_ok());
        assert!(validate_age(80, &limits).is_ok());
        assert!(validate_age(14, &limits).is_err());
        assert!(validate_age(81, &limits).is_err());
    }

    #[test]
    fn test_gpa_bounds_inclusive() {
        let limits = Limits::default();
        assert!(validate_gpa(0.0, &limits).is_ok());
        assert!(validate_gpa(10.0, &limits).is_ok());
        assert!(validate_gpa(-0.01, &limits).is_err());
        assert!(validate_gpa(10.01, &limits).is_err());
    }

    #[test]
    fn test_gpa_nan_rejected() {
        let result = validate_gpa(f64::NAN, &Limits::default());
        assert!(matches!(result, Err(ValidationError::GpaOutOfRange { .. })));
    }

    #[test]
    fn test_age_checked_before_gpa() {
        let err = validate_student(&student(12, 11.0), &Limits::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AgeOutOfRange);
    }

    #[test]
    fn test_gpa_failure_reported() {
        let err = validate_student(&student(20, 11.0), &Limits::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GpaOutOfRange);
        assert_eq!(err.to_string(), "gpa 11 is out of range [0, 10]");
    }

    #[test]
    fn test_age_error_message() {
        let err = validate_age(12, &Limits::default()).unwrap_err();
        assert_eq!(err.to_string(), "age 12 is out of range [15, 80]");
    }

    #[test]
    fn test_custom_limits() {
        let limits = Limits::new(18, 30, 1.0, 4.0).unwrap();
        assert!(validate_student(&student(18, 4.0), &limits).is_ok());
        assert!(validate_student(&student(17, 2.0), &limits).is_err());
        assert!(validate_student(&student(20, 4.5), &limits).is_err());
    }

    #[test]
    fn test_limits_deserialize_checked() {
        let limits: Limits = serde_json::from_str(
            r#"{"min_age":18,"max_age":30,"min_gpa":0.0,"max_gpa":4.0}"#,
        )
        .unwrap();
        assert_eq!(limits, Limits::new(18, 30, 0.0, 4.0).unwrap());

        let inverted = serde_json::from_str::<Limits>(
            r#"{"min_age":80,"max_age":15,"min_gpa":10.0,"max_gpa":0.0}"#,
        );
        let err = inverted.unwrap_err();
        assert!(err.to_string().contains("min_age 80 exceeds max_age 15"));
    }

    #[test]
    fn test_invalid_limits() {
        assert!(matches!(
            Limits::new(30, 18, 0.0, 10.0),
            Err(CoreError::InvalidLimits(_))
        ));
        assert!(matches!(
            Limits::new(15, 80, 5.0, 1.0),
            Err(CoreError::InvalidLimits(_))
        ));
        assert!(matches!(
            Limits::new(15, 80, 0.0, f64::INFINITY),
            Err(CoreError::InvalidLimits(_))
        ));
    }
}
