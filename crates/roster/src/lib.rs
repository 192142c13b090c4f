//! # Roster
//!
//! The unified API for Roster: an in-memory record manager for students
//! with validation at every mutation boundary.
//!
//! ## Overview
//!
//! - **Admission**: new students are checked for a fresh id, an age within
//!   `[15, 80]` and a gpa within `[0, 10]` before they are stored
//! - **Updates**: gpa and active flag are the only mutable fields, each
//!   re-validated on write
//! - **Queries**: lookup by id, full and active listings in admission
//!   order, and the rounded mean gpa
//!
//! Every fallible call returns an [`Outcome`] envelope instead of an error.
//!
//! ## Usage
//!
//! ```rust
//! use roster::{ErrorKind, Roster, Student, StudentId};
//!
//! let mut roster = Roster::new();
//!
//! let admitted = roster.admit(Student::new(1, "Ana", 20, "Engineering", true, 8.5));
//! assert!(admitted.success);
//!
//! let missing = roster.find_by_id(StudentId(999));
//! assert_eq!(missing.error, Some(ErrorKind::NotFound));
//! assert!(missing.payload.is_none());
//! ```
//!
//! ## Re-exports
//!
//! - `roster::core` - Core types (Student, Limits, Outcome, ...)
//! - `roster::store` - Store trait and in-memory implementation

pub mod demo;
pub mod roster;

pub use roster_core as core;
pub use roster_store as store;

pub use crate::roster::Roster;

pub use roster_core::{ErrorKind, Limits, Outcome, Student, StudentId};
pub use roster_store::{MemoryStore, RecordStore, StoreConfig, StoreError, StoreExt};
