//! Shared world state for guided task creation scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskbot::{
    conversation::{adapters::memory::InMemoryDraftStore, services::ConversationService},
    router::CommandRouter,
    task::{
        adapters::memory::InMemoryTaskRepository, domain::OwnerId, services::TaskStoreService,
    },
};

/// Task store type used by the BDD world.
pub type TestTaskStore = TaskStoreService<InMemoryTaskRepository, DefaultClock>;

/// Router type used by the BDD world.
pub type TestRouter = CommandRouter<InMemoryDraftStore, InMemoryTaskRepository, DefaultClock>;

/// Scenario world for guided task creation.
pub struct ConversationWorld {
    pub router: TestRouter,
    pub tasks: TestTaskStore,
    pub user: OwnerId,
    pub other_user: OwnerId,
    pub last_reply: Option<String>,
}

impl ConversationWorld {
    /// Creates a world over empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let tasks = TaskStoreService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&clock),
        );
        let conversations =
            ConversationService::new(Arc::new(InMemoryDraftStore::new()), tasks.clone(), clock);

        Self {
            router: CommandRouter::new(tasks.clone(), conversations),
            tasks,
            user: OwnerId::new(1),
            other_user: OwnerId::new(2),
            last_reply: None,
        }
    }
}

impl Default for ConversationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ConversationWorld {
    ConversationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
