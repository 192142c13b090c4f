//! # Roster Store
//!
//! Record store abstraction for Roster. Provides a trait-based interface
//! for student storage with an in-memory implementation.
//!
//! ## Overview
//!
//! The store owns the student collection and is the gatekeeper for every
//! invariant: ids are unique and every held record satisfies the configured
//! [`Limits`](roster_core::Limits). Validation always precedes mutation, so a
//! failed call leaves the store exactly as it was.
//!
//! ## Key Types
//!
//! - [`RecordStore`] - The trait for all store operations
//! - [`MemoryStore`] - Insertion-ordered, linear-scan in-memory storage
//! - [`StoreConfig`] - Limits and rounding precision
//! - [`StoreExt`] - Convenience queries available on every store
//!
//! ## Usage
//!
//! ```rust
//! use roster_core::Student;
//! use roster_store::{MemoryStore, RecordStore, StoreError};
//!
//! let mut store = MemoryStore::new();
//! store.admit(Student::new(1, "Ana", 20, "Engineering", true, 8.5)).unwrap();
//!
//! let dup = store.admit(Student::new(1, "Eva", 21, "Law", true, 7.0));
//! assert!(matches!(dup, Err(StoreError::DuplicateId(_))));
//! assert_eq!(store.average_gpa(), 8.5);
//! ```

pub mod config;
pub mod error;
pub mod memory;
pub mod traits;

pub use config::{StoreConfig, MAX_GPA_PRECISION};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{RecordStore, StoreExt};
