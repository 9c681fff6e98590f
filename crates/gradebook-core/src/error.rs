//! Gradebook error types.
//!
//! Editor operations never fail: unknown tests and refused steps are no-ops.
//! These errors cover the places where callers do need to react, namely raw
//! grade input and gradebook lookups.

use thiserror::Error;

/// Why a piece of raw grade input could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeInputError {
    /// The input was empty or only whitespace.
    #[error("grade input is empty")]
    Empty,

    /// The input could not be read as a number.
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

/// Errors raised when working with a [`Gradebook`](crate::model::Gradebook).
#[derive(Debug, Error)]
pub enum GradebookError {
    /// No student with this id exists in the gradebook.
    #[error("unknown student: {0}")]
    UnknownStudent(String),

    /// The gradebook could not be serialized back to TOML.
    #[error("failed to serialize gradebook: {0}")]
    Serialize(#[from] toml::ser::Error),
}
