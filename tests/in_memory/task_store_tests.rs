//! In-memory integration tests for the task store.

use rstest::rstest;
use taskbot::task::{
    domain::{Deadline, OwnerId, TaskDomainError, TaskId},
    services::{CreateTaskRequest, TaskStoreError},
};

use crate::in_memory::helpers::{TestTaskStore, task_store};

const ALICE: OwnerId = OwnerId::new(11);
const BOB: OwnerId = OwnerId::new(22);

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owners_see_only_their_tasks_in_creation_order(
    task_store: TestTaskStore,
) -> Result<(), eyre::Report> {
    let first = task_store
        .create_task(CreateTaskRequest::new(ALICE, "Write report"))
        .await?;
    task_store
        .create_task(CreateTaskRequest::new(BOB, "Walk the dog"))
        .await?;
    let second = task_store
        .create_task(
            CreateTaskRequest::new(ALICE, "Renew passport")
                .with_deadline(Deadline::parse("2025-01-01")?),
        )
        .await?;

    let alice_tasks = task_store.list_tasks(ALICE).await?;
    let bob_tasks = task_store.list_tasks(BOB).await?;

    eyre::ensure!(alice_tasks == vec![first, second.clone()], "unexpected tasks for alice");
    eyre::ensure!(bob_tasks.len() == 1, "bob should see one task");
    eyre::ensure!(
        second.deadline().map(|deadline| deadline.to_string()).as_deref() == Some("2025-01-01"),
        "deadline should round-trip unchanged"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mark_done_is_scoped_to_the_owner(task_store: TestTaskStore) -> Result<(), eyre::Report> {
    let task = task_store
        .create_task(CreateTaskRequest::new(ALICE, "Buy milk"))
        .await?;

    let stolen = task_store.mark_done(BOB, task.id()).await?;
    eyre::ensure!(!stolen, "another owner must not complete the task");
    eyre::ensure!(
        task_store.list_tasks(ALICE).await?.iter().all(|stored| !stored.is_done()),
        "task should still be pending"
    );

    eyre::ensure!(task_store.mark_done(ALICE, task.id()).await?, "owner completes task");
    eyre::ensure!(
        task_store.mark_done(ALICE, task.id()).await?,
        "completing twice still matches"
    );
    eyre::ensure!(
        !task_store.mark_done(ALICE, TaskId::new(999)).await?,
        "unknown id matches nothing"
    );
    Ok(())
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
#[tokio::test(flavor = "multi_thread")]
async fn blank_descriptions_are_rejected(task_store: TestTaskStore, #[case] description: &str) {
    let result = task_store
        .create_task(CreateTaskRequest::new(ALICE, description))
        .await;

    assert!(matches!(
        result,
        Err(TaskStoreError::Domain(TaskDomainError::EmptyDescription))
    ));
}
