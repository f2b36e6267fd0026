//! Per-owner draft of a task under construction.

use super::DraftError;
use crate::task::domain::{Deadline, OwnerId, TaskDescription};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Step of the guided task form a draft is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStage {
    /// Waiting for the task description.
    AwaitingDescription,
    /// Description collected, waiting for a deadline or a skip.
    AwaitingDeadline,
}

impl DraftStage {
    /// Returns the canonical representation used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingDescription => "awaiting_description",
            Self::AwaitingDeadline => "awaiting_deadline",
        }
    }
}

impl fmt::Display for DraftStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer given while a draft is awaiting its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineAnswer<'a> {
    /// Leave the deadline unset.
    Skip,
    /// Free text to be parsed as `YYYY-MM-DD`.
    Text(&'a str),
}

/// Fully collected draft, ready to be stored as a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedDraft {
    /// Owner of the task.
    pub owner_id: OwnerId,
    /// Collected description.
    pub description: TaskDescription,
    /// Collected deadline, `None` when skipped.
    pub deadline: Option<Deadline>,
}

/// In-progress task draft.
///
/// The stage is derived from the collected fields, so a draft cannot claim to
/// await a deadline without holding a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationDraft {
    owner_id: OwnerId,
    description: Option<TaskDescription>,
    started_at: DateTime<Utc>,
    last_activity_at: DateTime<Utc>,
}

impl ConversationDraft {
    /// Starts an empty draft awaiting its description.
    #[must_use]
    pub fn start(owner_id: OwnerId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            owner_id,
            description: None,
            started_at: timestamp,
            last_activity_at: timestamp,
        }
    }

    /// Returns the owner of the draft.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the stage the draft is waiting on.
    #[must_use]
    pub const fn stage(&self) -> DraftStage {
        if self.description.is_some() {
            DraftStage::AwaitingDeadline
        } else {
            DraftStage::AwaitingDescription
        }
    }

    /// Returns the collected description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns when the draft was started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns when the owner last answered.
    #[must_use]
    pub const fn last_activity_at(&self) -> DateTime<Utc> {
        self.last_activity_at
    }

    /// Returns `true` when no answer arrived within `ttl` before `now`.
    #[must_use]
    pub fn is_idle_since(&self, ttl: TimeDelta, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.last_activity_at) > ttl
    }

    /// Records the description and advances to [`DraftStage::AwaitingDeadline`].
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::UnexpectedStage`] when a description has already
    /// been collected and [`DraftError::EmptyDescription`] when the input is
    /// blank.
    pub fn accept_description(
        &mut self,
        input: &str,
        clock: &impl Clock,
    ) -> Result<(), DraftError> {
        self.expect_stage(DraftStage::AwaitingDescription)?;
        let description =
            TaskDescription::new(input).map_err(|_| DraftError::EmptyDescription)?;
        self.description = Some(description);
        self.touch(clock);
        Ok(())
    }

    /// Resolves the deadline answer into a completed draft.
    ///
    /// The draft itself is left unchanged so that it survives a failed
    /// commit; the caller discards it once the task is stored.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::UnexpectedStage`] while the description is still
    /// missing and [`DraftError::InvalidDeadline`] when the text is not a
    /// `YYYY-MM-DD` date.
    pub fn complete(&self, answer: DeadlineAnswer<'_>) -> Result<CompletedDraft, DraftError> {
        let Some(description) = self.description.clone() else {
            return Err(DraftError::UnexpectedStage {
                expected: DraftStage::AwaitingDeadline,
                actual: self.stage(),
            });
        };
        let deadline = match answer {
            DeadlineAnswer::Skip => None,
            DeadlineAnswer::Text(text) => Some(
                Deadline::parse(text).map_err(|_| DraftError::InvalidDeadline(text.to_owned()))?,
            ),
        };
        Ok(CompletedDraft {
            owner_id: self.owner_id,
            description,
            deadline,
        })
    }

    /// Updates the activity timestamp to the current clock time.
    pub fn touch(&mut self, clock: &impl Clock) {
        self.last_activity_at = clock.utc();
    }

    fn expect_stage(&self, expected: DraftStage) -> Result<(), DraftError> {
        let actual = self.stage();
        if actual != expected {
            return Err(DraftError::UnexpectedStage { expected, actual });
        }
        Ok(())
    }
}
