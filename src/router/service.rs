//! Dispatch of parsed input to the task and conversation services.

use mockable::Clock;
use thiserror::Error;

use super::command::{Command, Inbound};
use super::reply::{Reply, ReplyRenderer};
use crate::conversation::{
    domain::{DraftError, DraftStage},
    ports::DraftStore,
    services::{ConversationError, ConversationService, DraftInput, FlowOutcome},
};
use crate::task::{
    domain::{OwnerId, TaskDomainError, TaskId},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskStoreError, TaskStoreService},
};

/// Failures that cannot be answered with a specific reply.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Task storage failed.
    #[error(transparent)]
    TaskStore(#[from] TaskStoreError),
    /// Draft storage, or the commit of a draft, failed.
    #[error(transparent)]
    Conversation(#[from] ConversationError),
    /// A reply template failed to render.
    #[error("failed to render reply: {0}")]
    Render(#[from] minijinja::Error),
}

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;

/// Routes one owner's message to the matching handler and renders the reply.
pub struct CommandRouter<D, R, C>
where
    D: DraftStore,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    tasks: TaskStoreService<R, C>,
    conversations: ConversationService<D, R, C>,
    replies: ReplyRenderer,
}

impl<D, R, C> CommandRouter<D, R, C>
where
    D: DraftStore,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a router over the given services.
    #[must_use]
    pub fn new(tasks: TaskStoreService<R, C>, conversations: ConversationService<D, R, C>) -> Self {
        Self {
            tasks,
            conversations,
            replies: ReplyRenderer::new(),
        }
    }

    /// Returns the stage of the owner's open draft, or `None` when idle.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Conversation`] when the draft lookup fails.
    pub async fn stage(&self, owner_id: OwnerId) -> RouterResult<Option<DraftStage>> {
        Ok(self.conversations.stage(owner_id).await?)
    }

    /// Handles one inbound message and returns the reply to send back.
    ///
    /// Validation failures, unknown ids and misplaced commands are answered
    /// with a hint. Only storage and rendering failures are returned as
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError`] when storage or rendering fails.
    pub async fn handle(&self, owner_id: OwnerId, text: &str) -> RouterResult<Reply> {
        match Inbound::parse(text) {
            Inbound::Text(body) => self.feed_draft(owner_id, DraftInput::Text(body)).await,
            Inbound::Command(command) => self.dispatch(owner_id, command).await,
        }
    }

    async fn dispatch(&self, owner_id: OwnerId, command: Command<'_>) -> RouterResult<Reply> {
        tracing::debug!(%owner_id, ?command, "dispatching command");
        match command {
            Command::Start | Command::Help => Ok(self.replies.help()),
            Command::Add(text) => self.add(owner_id, text).await,
            Command::New => {
                self.conversations.begin(owner_id).await?;
                Ok(self.replies.ask_description())
            }
            Command::List => {
                let tasks = self.tasks.list_tasks(owner_id).await?;
                Ok(self.replies.task_list(&tasks)?)
            }
            Command::Done(argument) => self.done(owner_id, argument).await,
            Command::Skip => self.feed_draft(owner_id, DraftInput::Skip).await,
            Command::Cancel => {
                if self.conversations.cancel(owner_id).await? {
                    Ok(self.replies.cancelled())
                } else {
                    Ok(self.replies.nothing_to_cancel())
                }
            }
            Command::Unknown(name) => Ok(self.replies.unknown_command(name)?),
        }
    }

    async fn add(&self, owner_id: OwnerId, text: &str) -> RouterResult<Reply> {
        if text.trim().is_empty() {
            return Ok(self.replies.add_usage());
        }
        match self
            .tasks
            .create_task(CreateTaskRequest::new(owner_id, text))
            .await
        {
            Ok(task) => Ok(self.replies.task_added(&task)?),
            Err(TaskStoreError::Domain(TaskDomainError::EmptyDescription)) => {
                Ok(self.replies.add_usage())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn done(&self, owner_id: OwnerId, argument: &str) -> RouterResult<Reply> {
        let Ok(task_id) = argument.parse::<TaskId>() else {
            return Ok(self.replies.done_usage());
        };
        if self.tasks.mark_done(owner_id, task_id).await? {
            Ok(self.replies.marked_done(task_id)?)
        } else {
            Ok(self.replies.not_found(task_id)?)
        }
    }

    async fn feed_draft(&self, owner_id: OwnerId, input: DraftInput<'_>) -> RouterResult<Reply> {
        match self.conversations.submit(owner_id, input).await {
            Ok(FlowOutcome::DescriptionAccepted) => Ok(self.replies.ask_deadline()),
            Ok(FlowOutcome::Committed(task)) => Ok(self.replies.task_added(&task)?),
            Err(ConversationError::NoOpenDraft) => Ok(match input {
                DraftInput::Text(_) => self.replies.text_hint(),
                DraftInput::Skip => self.replies.nothing_to_skip(),
            }),
            Err(ConversationError::Draft(DraftError::EmptyDescription)) => {
                Ok(self.replies.empty_description())
            }
            Err(ConversationError::Draft(DraftError::InvalidDeadline(raw))) => {
                Ok(self.replies.invalid_deadline(&raw)?)
            }
            Err(ConversationError::Draft(DraftError::UnexpectedStage { .. })) => {
                Ok(self.replies.skip_description())
            }
            Err(err) => Err(err.into()),
        }
    }
}
