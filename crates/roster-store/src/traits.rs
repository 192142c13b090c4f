//! RecordStore trait: the abstract interface for student storage.
//!
//! This trait is the capability contract a store offers to the facade.
//! Implementations include the in-memory store; any other backend must keep
//! the same ordering and validation semantics.

use roster_core::{Student, StudentId};

use crate::error::Result;

/// The RecordStore trait: synchronous interface for student storage.
///
/// # Design Notes
///
/// - **Validation before mutation**: every write checks its preconditions
///   first, so a failed call never leaves a partial change behind.
/// - **Insertion order**: listings return students in the order they were
///   admitted, regardless of later field updates.
/// - **Read-only views**: listings borrow the store; callers cannot mutate a
///   record without going through an update operation.
pub trait RecordStore {
    // ─────────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Admit a new student.
    ///
    /// Checks in order: duplicate id, age range, gpa range. On success the
    /// student is appended and a reference to the stored record returned.
    fn admit(&mut self, student: Student) -> Result<&Student>;

    /// Replace a student's gpa.
    ///
    /// The range check runs before the lookup, so an out-of-range gpa is
    /// reported even when the id is unknown.
    fn update_gpa(&mut self, id: StudentId, gpa: f64) -> Result<&Student>;

    /// Set a student's active flag.
    fn update_active_flag(&mut self, id: StudentId, active: bool) -> Result<&Student>;

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// All students, in insertion order.
    fn list_all(&self) -> &[Student];

    /// Find a student by id. First match in insertion order wins.
    fn find_by_id(&self, id: StudentId) -> Result<&Student>;

    /// Active students, in insertion order.
    fn list_active(&self) -> Vec<&Student>;

    /// Mean gpa across all students, rounded to the configured precision.
    ///
    /// Returns exactly `0.0` for an empty store.
    fn average_gpa(&self) -> f64;
}

/// Extension trait for common store queries.
pub trait StoreExt: RecordStore {
    /// Number of students held.
    fn len(&self) -> usize {
        self.list_all().len()
    }

    /// Whether the store holds no students.
    fn is_empty(&self) -> bool {
        self.list_all().is_empty()
    }

    /// Whether a student with `id` is held.
    fn contains(&self, id: StudentId) -> bool {
        self.list_all().iter().any(|s| s.id == id)
    }

    /// Number of active students.
    fn count_active(&self) -> usize {
        self.list_all().iter().filter(|s| s.active).count()
    }
}

impl<S: RecordStore + ?Sized> StoreExt for S {}
