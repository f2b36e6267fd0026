//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The deadline is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid deadline '{0}', expected YYYY-MM-DD")]
    InvalidDeadline(String),
}

/// Error returned while parsing a task identifier from user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task id: {0}")]
pub struct ParseTaskIdError(pub String);
