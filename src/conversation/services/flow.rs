//! Service driving the description → deadline form for new tasks.

use chrono::TimeDelta;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

use crate::conversation::{
    domain::{ConversationDraft, DeadlineAnswer, DraftError, DraftStage},
    ports::{DraftStore, DraftStoreError},
};
use crate::task::{
    domain::{OwnerId, Task},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskStoreError, TaskStoreService},
};

/// Input fed to an open draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftInput<'a> {
    /// Plain text typed by the owner.
    Text(&'a str),
    /// The skip token, only meaningful while awaiting the deadline.
    Skip,
}

/// Result of feeding an input to an open draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The description was stored; the draft now awaits its deadline.
    DescriptionAccepted,
    /// The draft was committed as a task and discarded.
    Committed(Task),
}

/// Service-level errors for guided task creation.
#[derive(Debug, Error)]
pub enum ConversationError {
    /// The owner has no open draft.
    #[error("no task draft is open")]
    NoOpenDraft,
    /// The draft rejected the input; its stage is unchanged.
    #[error(transparent)]
    Draft(#[from] DraftError),
    /// Draft storage failed.
    #[error(transparent)]
    DraftStore(#[from] DraftStoreError),
    /// Committing the task failed; the draft is kept for another attempt.
    #[error(transparent)]
    TaskStore(#[from] TaskStoreError),
}

/// Result type for conversation service operations.
pub type ConversationResult<T> = Result<T, ConversationError>;

/// Conversation state machine over a keyed draft store.
///
/// An owner with no stored draft is idle. Drafts idle for longer than the
/// optional time-to-live are discarded on next access.
pub struct ConversationService<D, R, C>
where
    D: DraftStore,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    drafts: Arc<D>,
    tasks: TaskStoreService<R, C>,
    clock: Arc<C>,
    draft_ttl: Option<TimeDelta>,
}

impl<D, R, C> Clone for ConversationService<D, R, C>
where
    D: DraftStore,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            drafts: Arc::clone(&self.drafts),
            tasks: self.tasks.clone(),
            clock: Arc::clone(&self.clock),
            draft_ttl: self.draft_ttl,
        }
    }
}

impl<D, R, C> ConversationService<D, R, C>
where
    D: DraftStore,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a conversation service whose drafts never expire.
    #[must_use]
    pub const fn new(drafts: Arc<D>, tasks: TaskStoreService<R, C>, clock: Arc<C>) -> Self {
        Self {
            drafts,
            tasks,
            clock,
            draft_ttl: None,
        }
    }

    /// Discards drafts that see no input for longer than `ttl`.
    #[must_use]
    pub fn with_draft_ttl(mut self, ttl: TimeDelta) -> Self {
        self.draft_ttl = Some(ttl);
        self
    }

    /// Opens a fresh draft for the owner, replacing any draft in progress.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::DraftStore`] when the draft cannot be
    /// stored.
    pub async fn begin(&self, owner_id: OwnerId) -> ConversationResult<()> {
        let replaced = self.active_draft(owner_id).await?.is_some();
        let draft = ConversationDraft::start(owner_id, &*self.clock);
        self.drafts.save(&draft).await?;
        tracing::debug!(%owner_id, replaced, "task draft started");
        Ok(())
    }

    /// Returns the stage of the owner's open draft, or `None` when idle.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::DraftStore`] when the lookup fails.
    pub async fn stage(&self, owner_id: OwnerId) -> ConversationResult<Option<DraftStage>> {
        Ok(self
            .active_draft(owner_id)
            .await?
            .map(|draft| draft.stage()))
    }

    /// Feeds one input to the owner's open draft.
    ///
    /// A rejected input leaves the draft in its current stage. When the
    /// deadline step succeeds the task is stored and the draft discarded. A
    /// failure to discard the draft after the task is stored is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::NoOpenDraft`] when the owner is idle,
    /// [`ConversationError::Draft`] when the input is invalid for the current
    /// stage, and [`ConversationError::TaskStore`] when the commit fails.
    pub async fn submit(
        &self,
        owner_id: OwnerId,
        input: DraftInput<'_>,
    ) -> ConversationResult<FlowOutcome> {
        let mut draft = self
            .active_draft(owner_id)
            .await?
            .ok_or(ConversationError::NoOpenDraft)?;

        match (draft.stage(), input) {
            (DraftStage::AwaitingDescription, DraftInput::Text(text)) => {
                draft.accept_description(text, &*self.clock)?;
                self.drafts.save(&draft).await?;
                Ok(FlowOutcome::DescriptionAccepted)
            }
            (DraftStage::AwaitingDescription, DraftInput::Skip) => {
                Err(DraftError::UnexpectedStage {
                    expected: DraftStage::AwaitingDeadline,
                    actual: DraftStage::AwaitingDescription,
                }
                .into())
            }
            (DraftStage::AwaitingDeadline, DraftInput::Skip) => {
                self.commit(draft, DeadlineAnswer::Skip).await
            }
            (DraftStage::AwaitingDeadline, DraftInput::Text(text)) => {
                self.commit(draft, DeadlineAnswer::Text(text)).await
            }
        }
    }

    /// Abandons the owner's open draft. Returns `true` when one was open.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::DraftStore`] when the draft cannot be
    /// removed.
    pub async fn cancel(&self, owner_id: OwnerId) -> ConversationResult<bool> {
        if self.active_draft(owner_id).await?.is_none() {
            return Ok(false);
        }
        let removed = self.drafts.remove(owner_id).await?;
        tracing::debug!(%owner_id, removed, "task draft cancelled");
        Ok(removed)
    }

    async fn commit(
        &self,
        mut draft: ConversationDraft,
        answer: DeadlineAnswer<'_>,
    ) -> ConversationResult<FlowOutcome> {
        let completed = match draft.complete(answer) {
            Ok(completed) => completed,
            Err(err) => {
                draft.touch(&*self.clock);
                self.drafts.save(&draft).await?;
                return Err(err.into());
            }
        };

        let mut request = CreateTaskRequest::new(completed.owner_id, completed.description);
        if let Some(deadline) = completed.deadline {
            request = request.with_deadline(deadline);
        }
        let task = self.tasks.create_task(request).await?;
        // The task is stored; a leftover draft must not turn into a retry.
        if let Err(err) = self.drafts.remove(completed.owner_id).await {
            tracing::warn!(
                owner_id = %completed.owner_id,
                task_id = %task.id(),
                error = %err,
                "failed to discard committed task draft"
            );
        }
        tracing::debug!(owner_id = %completed.owner_id, task_id = %task.id(), "task draft committed");
        Ok(FlowOutcome::Committed(task))
    }

    async fn active_draft(
        &self,
        owner_id: OwnerId,
    ) -> ConversationResult<Option<ConversationDraft>> {
        let Some(draft) = self.drafts.load(owner_id).await? else {
            return Ok(None);
        };
        let Some(ttl) = self.draft_ttl else {
            return Ok(Some(draft));
        };
        if draft.is_idle_since(ttl, self.clock.utc()) {
            self.drafts.remove(owner_id).await?;
            tracing::debug!(%owner_id, stage = %draft.stage(), "idle task draft expired");
            return Ok(None);
        }
        Ok(Some(draft))
    }
}
