//! Service layer for creating, listing and completing tasks.

use crate::task::{
    domain::{Deadline, NewTask, OwnerId, Task, TaskDescription, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    owner_id: OwnerId,
    description: String,
    deadline: Option<Deadline>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(owner_id: OwnerId, description: impl Into<String>) -> Self {
        Self {
            owner_id,
            description: description.into(),
            deadline: None,
        }
    }

    /// Sets the task deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task store service operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Owner-scoped task store.
pub struct TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task store service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates and persists a new pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the description is empty and
    /// [`TaskStoreError::Repository`] when the write fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskStoreResult<Task> {
        let description = TaskDescription::new(request.description)?;
        let new_task = NewTask::new(
            request.owner_id,
            description,
            request.deadline,
            &*self.clock,
        );
        let task = self.repository.insert(new_task).await?;
        tracing::info!(
            owner_id = %task.owner_id(),
            task_id = %task.id(),
            has_deadline = task.deadline().is_some(),
            "task created"
        );
        Ok(task)
    }

    /// Lists the owner's tasks in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the lookup fails.
    pub async fn list_tasks(&self, owner_id: OwnerId) -> TaskStoreResult<Vec<Task>> {
        Ok(self.repository.list_by_owner(owner_id).await?)
    }

    /// Marks the owner's task as done.
    ///
    /// Returns `Ok(false)` when the task does not exist or belongs to another
    /// owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the update fails.
    pub async fn mark_done(&self, owner_id: OwnerId, task_id: TaskId) -> TaskStoreResult<bool> {
        let updated = self.repository.mark_done(owner_id, task_id).await?;
        tracing::debug!(%owner_id, %task_id, updated, "mark done requested");
        Ok(updated)
    }
}
