//! Guided task creation committed through `PostgreSQL`.

use std::sync::Arc;

use mockable::DefaultClock;
use taskbot::{
    conversation::{adapters::memory::InMemoryDraftStore, services::ConversationService},
    router::CommandRouter,
    task::services::TaskStoreService,
};

use crate::postgres::helpers::{fresh_owner, repository};

#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs a PostgreSQL database in TASKBOT_TEST_DATABASE_URL"]
async fn guided_flow_persists_task() -> Result<(), eyre::Report> {
    let repository = repository().await?;
    let clock = Arc::new(DefaultClock);
    let tasks = TaskStoreService::new(Arc::new(repository), Arc::clone(&clock));
    let conversations =
        ConversationService::new(Arc::new(InMemoryDraftStore::new()), tasks.clone(), clock);
    let router = CommandRouter::new(tasks.clone(), conversations);
    let owner = fresh_owner();

    for text in ["/new", "Read", "not-a-date", "2025-06-01"] {
        router.handle(owner, text).await?;
    }

    let listed = tasks.list_tasks(owner).await?;
    eyre::ensure!(listed.len() == 1, "expected one task, found {}", listed.len());
    let task = listed
        .first()
        .ok_or_else(|| eyre::eyre!("expected a stored task"))?;
    eyre::ensure!(task.description().as_str() == "Read", "description mismatch");
    eyre::ensure!(
        task.deadline().map(|deadline| deadline.to_string()).as_deref() == Some("2025-06-01"),
        "deadline mismatch"
    );
    Ok(())
}
