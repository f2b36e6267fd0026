//! Error types for draft transitions.

use super::DraftStage;
use thiserror::Error;

/// Errors returned when a draft rejects an answer.
///
/// A rejected answer never changes the draft's stage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    /// The description answer was empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The deadline answer was not a `YYYY-MM-DD` date.
    #[error("invalid deadline '{0}', expected YYYY-MM-DD")]
    InvalidDeadline(String),

    /// The answer does not belong to the draft's current stage.
    #[error("draft is {actual}, expected {expected}")]
    UnexpectedStage {
        /// Stage the answer is meant for.
        expected: DraftStage,
        /// Stage the draft is actually in.
        actual: DraftStage,
    },
}
