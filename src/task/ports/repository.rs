//! Repository port for owner-scoped task persistence.

use crate::task::domain::{NewTask, OwnerId, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every read and update is scoped by owner. Implementations must commit each
/// mutation before returning.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the write fails.
    async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task>;

    /// Returns every task owned by `owner_id` in creation order.
    ///
    /// Returns an empty vector when the owner has no tasks.
    async fn list_by_owner(&self, owner_id: OwnerId) -> TaskRepositoryResult<Vec<Task>>;

    /// Marks the task done when it exists and belongs to `owner_id`.
    ///
    /// Returns `false` when no task matched. A missing task and a task owned
    /// by someone else are reported identically.
    async fn mark_done(&self, owner_id: OwnerId, task_id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
