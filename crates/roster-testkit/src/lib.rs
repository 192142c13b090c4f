//! # Roster Testkit
//!
//! Testing utilities for Roster.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Ready-made students and seeded rosters
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use roster_testkit::generators::StudentParams;
//!
//! proptest! {
//!     #[test]
//!     fn valid_students_are_admitted(params: StudentParams) {
//!         let mut roster = roster::Roster::new();
//!         prop_assert!(roster.admit(params.into_student()).success);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use roster_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::seeded();
//! assert_eq!(fixture.roster.len(), 3);
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{sample_students, student, TestFixture};
pub use generators::StudentParams;
