//! The Roster: outcome-returning facade over a record store.
//!
//! The store reports failures as `StoreError`; the facade turns every call
//! into an [`Outcome`] so callers branch on a flag instead of handling
//! errors, and logs each call on the way through.

use roster_core::{Outcome, Student, StudentId};
use roster_store::{MemoryStore, RecordStore, StoreConfig, StoreError, StoreExt};

const ADMITTED: &str = "student admitted";
const FOUND: &str = "student found";
const GPA_UPDATED: &str = "gpa updated";
const ACTIVE_UPDATED: &str = "active flag updated";

/// The main Roster struct.
///
/// Provides:
/// - Admitting students
/// - Looking up and listing students
/// - Updating gpa and active flag
/// - Computing the mean gpa
#[derive(Debug, Clone, Default)]
pub struct Roster<S: RecordStore = MemoryStore> {
    store: S,
}

impl Roster<MemoryStore> {
    /// Create a roster backed by an empty in-memory store with default limits.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Create a roster backed by an empty in-memory store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_store(MemoryStore::with_config(config))
    }
}

impl<S: RecordStore> Roster<S> {
    /// Create a roster over an existing store.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of students held.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the roster holds no students.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Admit a new student.
    pub fn admit(&mut self, student: Student) -> Outcome<Student> {
        let id = student.id;
        respond("admit", id, ADMITTED, self.store.admit(student))
    }

    /// Replace a student's gpa.
    pub fn update_gpa(&mut self, id: StudentId, gpa: f64) -> Outcome<Student> {
        respond("update_gpa", id, GPA_UPDATED, self.store.update_gpa(id, gpa))
    }

    /// Set a student's active flag.
    pub fn update_active_flag(&mut self, id: StudentId, active: bool) -> Outcome<Student> {
        respond(
            "update_active_flag",
            id,
            ACTIVE_UPDATED,
            self.store.update_active_flag(id, active),
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Find a student by id.
    pub fn find_by_id(&self, id: StudentId) -> Outcome<Student> {
        respond("find_by_id", id, FOUND, self.store.find_by_id(id))
    }

    /// Snapshot of all students, in admission order.
    pub fn list_all(&self) -> Vec<Student> {
        let students = self.store.list_all().to_vec();
        tracing::trace!(count = students.len(), "listed all students");
        students
    }

    /// Snapshot of active students, in admission order.
    pub fn list_active(&self) -> Vec<Student> {
        let students: Vec<Student> = self.store.list_active().into_iter().cloned().collect();
        tracing::trace!(count = students.len(), "listed active students");
        students
    }

    /// Mean gpa rounded to the store's precision; `0.0` when empty.
    pub fn average_gpa(&self) -> f64 {
        let average = self.store.average_gpa();
        tracing::trace!(average, count = self.store.len(), "computed average gpa");
        average
    }
}

/// Wrap a store result in an outcome, logging either way.
fn respond(
    op: &'static str,
    id: StudentId,
    message: &'static str,
    result: Result<&Student, StoreError>,
) -> Outcome<Student> {
    match result {
        Ok(student) => {
            tracing::debug!(op, id = %id, "{}", message);
            Outcome::success(message, student.clone())
        }
        Err(e) => {
            tracing::warn!(op, id = %id, kind = ?e.kind(), "rejected: {}", e);
            Outcome::failure(e.kind(), e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{ErrorKind, Limits};

    fn ana() -> Student {
        Student::new(1, "Ana", 20, "Engineering", true, 8.5)
    }

    #[test]
    fn test_admit_echoes_record() {
        let mut roster = Roster::new();
        let outcome = roster.admit(ana());

        assert!(outcome.success);
        assert_eq!(outcome.message, "student admitted");
        assert_eq!(outcome.payload, Some(ana()));
        assert_eq!(outcome.error, None);
    }

    #[test]
    fn test_failure_message_is_store_error() {
        let mut roster = Roster::new();
        roster.admit(ana());

        let outcome = roster.admit(ana());
        assert!(!outcome.success);
        assert_eq!(outcome.message, "student id 1 already exists");
        assert_eq!(outcome.error, Some(ErrorKind::DuplicateId));
        assert!(outcome.payload.is_none());
    }

    #[test]
    fn test_update_returns_mutated_record() {
        let mut roster = Roster::new();
        roster.admit(ana());

        let outcome = roster.update_gpa(StudentId(1), 9.75);
        assert_eq!(outcome.message, "gpa updated");
        assert_eq!(outcome.payload.map(|s| s.gpa), Some(9.75));

        let outcome = roster.update_active_flag(StudentId(1), false);
        assert_eq!(outcome.message, "active flag updated");
        assert_eq!(outcome.payload.map(|s| s.active), Some(false));
    }

    #[test]
    fn test_snapshots_are_detached() {
        let mut roster = Roster::new();
        roster.admit(ana());

        let mut snapshot = roster.list_all();
        snapshot[0].gpa = 99.0;

        assert_eq!(roster.find_by_id(StudentId(1)).payload.map(|s| s.gpa), Some(8.5));
    }

    #[test]
    fn test_with_config_limits() {
        let limits = Limits::new(18, 30, 0.0, 4.0).unwrap();
        let mut roster = Roster::with_config(StoreConfig::default().with_limits(limits));

        let outcome = roster.admit(ana());
        assert_eq!(outcome.error, Some(ErrorKind::GpaOutOfRange));
        assert!(roster.is_empty());
    }
}
