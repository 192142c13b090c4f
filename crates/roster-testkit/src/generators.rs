//! Proptest generators for property-based testing.

use proptest::prelude::*;

use roster_core::{Student, StudentId, MAX_AGE, MAX_GPA, MIN_AGE, MIN_GPA};

/// Generate a student id from a small range so collisions are common.
pub fn student_id() -> impl Strategy<Value = StudentId> {
    (0u64..64).prop_map(StudentId)
}

/// Generate an age inside the default limits.
pub fn valid_age() -> impl Strategy<Value = u32> {
    MIN_AGE..=MAX_AGE
}

/// Generate an age outside the default limits.
pub fn invalid_age() -> impl Strategy<Value = u32> {
    prop_oneof![0..MIN_AGE, (MAX_AGE + 1)..=200]
}

/// Generate a gpa inside the default limits, bounds included.
pub fn valid_gpa() -> impl Strategy<Value = f64> {
    prop_oneof![Just(MIN_GPA), Just(MAX_GPA), MIN_GPA..=MAX_GPA]
}

/// Generate a gpa outside the default limits.
pub fn invalid_gpa() -> impl Strategy<Value = f64> {
    prop_oneof![
        -100.0..(MIN_GPA - 0.001),
        (MAX_GPA + 0.001)..100.0,
        Just(f64::NAN),
    ]
}

/// Generate a name.
pub fn name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,11}".prop_map(String::from)
}

/// Parameters for a student that passes field validation.
#[derive(Debug, Clone)]
pub struct StudentParams {
    pub id: StudentId,
    pub name: String,
    pub age: u32,
    pub major: String,
    pub active: bool,
    pub gpa: f64,
}

impl StudentParams {
    pub fn into_student(self) -> Student {
        Student::new(self.id, self.name, self.age, self.major, self.active, self.gpa)
    }
}

impl Arbitrary for StudentParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            student_id(),
            name(),
            valid_age(),
            name(),
            any::<bool>(),
            valid_gpa(),
        )
            .prop_map(|(id, name, age, major, active, gpa)| StudentParams {
                id,
                name,
                age,
                major,
                active,
                gpa,
            })
            .boxed()
    }
}

/// A write against an existing roster.
#[derive(Debug, Clone)]
pub enum Update {
    Gpa(StudentId, f64),
    Active(StudentId, bool),
}

/// Generate an update with a mix of valid and invalid gpas.
pub fn update() -> impl Strategy<Value = Update> {
    prop_oneof![
        (student_id(), -2.0..12.0f64).prop_map(|(id, gpa)| Update::Gpa(id, gpa)),
        (student_id(), any::<bool>()).prop_map(|(id, active)| Update::Active(id, active)),
    ]
}
