//! # Roster Core
//!
//! Pure types for the Roster record manager: students, value limits,
//! field validation, and the outcome envelope.
//!
//! This crate contains no I/O and no storage. It is plain data plus the
//! checks every store applies before it mutates anything.
//!
//! ## Key Types
//!
//! - [`Student`] - The record held by a store
//! - [`StudentId`] - Caller-supplied identifier, unique within a store
//! - [`Limits`] - Inclusive age and gpa ranges enforced at admission and update
//! - [`Outcome`] - Uniform success/message/payload envelope
//! - [`ErrorKind`] - Machine-readable failure tag carried by an [`Outcome`]

pub mod error;
pub mod outcome;
pub mod student;
pub mod types;
pub mod validation;

pub use error::{CoreError, ErrorKind, ValidationError};
pub use outcome::Outcome;
pub use student::Student;
pub use types::StudentId;
pub use validation::{
    validate_age, validate_gpa, validate_student, Limits, MAX_AGE, MAX_GPA, MIN_AGE, MIN_GPA,
};
