//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskbot::{
    conversation::{adapters::memory::InMemoryDraftStore, services::ConversationService},
    router::CommandRouter,
    task::{adapters::memory::InMemoryTaskRepository, services::TaskStoreService},
};

/// Task store over the in-memory repository.
pub type TestTaskStore = TaskStoreService<InMemoryTaskRepository, DefaultClock>;

/// Router over the in-memory adapters.
pub type TestRouter = CommandRouter<InMemoryDraftStore, InMemoryTaskRepository, DefaultClock>;

/// Provides a fresh task store for each test.
#[fixture]
pub fn task_store() -> TestTaskStore {
    TaskStoreService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides a router sharing `task_store` with its conversation service.
#[must_use]
pub fn router_over(tasks: TestTaskStore) -> TestRouter {
    let conversations = ConversationService::new(
        Arc::new(InMemoryDraftStore::new()),
        tasks.clone(),
        Arc::new(DefaultClock),
    );
    CommandRouter::new(tasks, conversations)
}

/// Provides a router over fresh in-memory adapters.
#[fixture]
pub fn router(task_store: TestTaskStore) -> TestRouter {
    router_over(task_store)
}
