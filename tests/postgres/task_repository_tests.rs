//! `PostgreSQL` repository tests for owner-scoped task storage.

use std::sync::Arc;

use mockable::DefaultClock;
use taskbot::task::{
    domain::{Deadline, TaskId},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskStoreService},
};

use crate::postgres::helpers::{fresh_owner, repository};

#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs a PostgreSQL database in TASKBOT_TEST_DATABASE_URL"]
async fn created_tasks_are_listed_in_id_order() -> Result<(), eyre::Report> {
    let repository = repository().await?;
    let store = TaskStoreService::new(Arc::new(repository), Arc::new(DefaultClock));
    let owner = fresh_owner();

    let first = store
        .create_task(CreateTaskRequest::new(owner, "  Buy milk  "))
        .await?;
    let second = store
        .create_task(
            CreateTaskRequest::new(owner, "Renew passport")
                .with_deadline(Deadline::parse("2025-01-01")?),
        )
        .await?;

    let listed = store.list_tasks(owner).await?;

    eyre::ensure!(listed.len() == 2, "expected two tasks, found {}", listed.len());
    eyre::ensure!(first.id().value() < second.id().value(), "ids must increase");
    let ids: Vec<TaskId> = listed.iter().map(|task| task.id()).collect();
    eyre::ensure!(ids == vec![first.id(), second.id()], "tasks out of order");
    eyre::ensure!(
        listed.iter().all(|task| !task.is_done()),
        "new tasks must be pending"
    );
    let stored_first = listed
        .first()
        .ok_or_else(|| eyre::eyre!("expected the first task"))?;
    eyre::ensure!(
        stored_first.description().as_str() == "Buy milk",
        "description should be stored trimmed"
    );
    let stored_second = listed
        .last()
        .ok_or_else(|| eyre::eyre!("expected the second task"))?;
    eyre::ensure!(
        stored_second.deadline().map(|deadline| deadline.to_string()).as_deref()
            == Some("2025-01-01"),
        "deadline should round-trip unchanged"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs a PostgreSQL database in TASKBOT_TEST_DATABASE_URL"]
async fn mark_done_only_matches_the_owner() -> Result<(), eyre::Report> {
    let repository = Arc::new(repository().await?);
    let store = TaskStoreService::new(Arc::clone(&repository), Arc::new(DefaultClock));
    let owner = fresh_owner();
    let stranger = fresh_owner();
    let task = store
        .create_task(CreateTaskRequest::new(owner, "Water plants"))
        .await?;

    eyre::ensure!(
        !repository.mark_done(stranger, task.id()).await?,
        "stranger must not match"
    );
    eyre::ensure!(
        store.list_tasks(owner).await?.iter().all(|stored| !stored.is_done()),
        "task must stay pending"
    );
    eyre::ensure!(repository.mark_done(owner, task.id()).await?, "owner matches");
    eyre::ensure!(
        repository.mark_done(owner, task.id()).await?,
        "repeat completion still matches"
    );
    eyre::ensure!(
        store.list_tasks(owner).await?.iter().all(|stored| stored.is_done()),
        "task should be done"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs a PostgreSQL database in TASKBOT_TEST_DATABASE_URL"]
async fn owner_without_tasks_lists_nothing() -> Result<(), eyre::Report> {
    let repository = repository().await?;

    let listed = repository.list_by_owner(fresh_owner()).await?;

    eyre::ensure!(listed.is_empty(), "expected no tasks");
    Ok(())
}
