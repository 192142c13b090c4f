//! Test fixtures and helpers.

use roster::demo::demo_students;
use roster::Roster;
use roster_core::{Student, StudentId};
use roster_store::StoreConfig;

/// The three students used across the demo and tests (Ana, Luis, Carlos).
pub fn sample_students() -> Vec<Student> {
    demo_students()
}

/// A valid student with the given id and placeholder text fields.
pub fn student(id: u64, age: u32, gpa: f64, active: bool) -> Student {
    Student::new(id, format!("student-{id}"), age, "Undeclared", active, gpa)
}

/// A test fixture wrapping an in-memory roster.
pub struct TestFixture {
    pub roster: Roster,
}

impl TestFixture {
    /// An empty roster with default limits.
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
        }
    }

    /// An empty roster with custom configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            roster: Roster::with_config(config),
        }
    }

    /// A roster holding [`sample_students`].
    pub fn seeded() -> Self {
        let mut fixture = Self::new();
        fixture.admit_all(sample_students());
        fixture
    }

    /// Admit each student, panicking if any is rejected.
    pub fn admit_all(&mut self, students: impl IntoIterator<Item = Student>) {
        for student in students {
            let id = student.id;
            let outcome = self.roster.admit(student);
            assert!(outcome.success, "admitting {id} failed: {}", outcome.message);
        }
    }

    /// Ids of every student, in admission order.
    pub fn ids(&self) -> Vec<StudentId> {
        self.roster.list_all().into_iter().map(|s| s.id).collect()
    }

    /// Ids of active students, in admission order.
    pub fn active_ids(&self) -> Vec<StudentId> {
        self.roster.list_active().into_iter().map(|s| s.id).collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
