//! In-memory implementation of the RecordStore trait.
//!
//! Students live in a `Vec` in admission order. Every lookup is a linear
//! scan. All data is lost when the store is dropped.

use roster_core::{validate_gpa, validate_student, Student, StudentId};

use crate::config::{StoreConfig, MAX_GPA_PRECISION};
use crate::error::{Result, StoreError};
use crate::traits::RecordStore;

/// In-memory store implementation.
///
/// Not shared between threads; mutating calls take `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    students: Vec<Student>,
    config: StoreConfig,
}

impl MemoryStore {
    /// Create a new empty store with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            students: Vec::new(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn find_mut(&mut self, id: StudentId) -> Result<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl RecordStore for MemoryStore {
    fn admit(&mut self, student: Student) -> Result<&Student> {
        if self.students.iter().any(|s| s.id == student.id) {
            return Err(StoreError::DuplicateId(student.id));
        }
        validate_student(&student, self.config.limits())?;

        tracing::trace!(id = %student.id, "appending student");
        let index = self.students.len();
        self.students.push(student);
        Ok(&self.students[index])
    }

    fn update_gpa(&mut self, id: StudentId, gpa: f64) -> Result<&Student> {
        validate_gpa(gpa, self.config.limits())?;

        let student = self.find_mut(id)?;
        student.gpa = gpa;
        Ok(&*student)
    }

    fn update_active_flag(&mut self, id: StudentId, active: bool) -> Result<&Student> {
        let student = self.find_mut(id)?;
        student.active = active;
        Ok(&*student)
    }

    fn list_all(&self) -> &[Student] {
        &self.students
    }

    fn find_by_id(&self, id: StudentId) -> Result<&Student> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn list_active(&self) -> Vec<&Student> {
        self.students.iter().filter(|s| s.active).collect()
    }

    fn average_gpa(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }

        let total: f64 = self.students.iter().map(|s| s.gpa).sum();
        round_to(total / self.students.len() as f64, self.config.gpa_precision())
    }
}

/// Round half away from zero to `places` decimal places.
///
/// `places` is at most `MAX_GPA_PRECISION`, enforced by `StoreConfig`.
fn round_to(value: f64, places: u32) -> f64 {
    debug_assert!(places <= MAX_GPA_PRECISION);
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
