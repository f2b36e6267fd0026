//! Guided task creation driven through the command router.

use rstest::rstest;
use taskbot::{conversation::domain::DraftStage, task::domain::OwnerId};

use crate::in_memory::helpers::{TestRouter, TestTaskStore, router, router_over, task_store};

const OWNER: OwnerId = OwnerId::new(501);

async fn send(router: &TestRouter, text: &str) -> Result<String, eyre::Report> {
    Ok(router.handle(OWNER, text).await?.text().to_owned())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_description_skip_creates_task_without_deadline(
    task_store: TestTaskStore,
) -> Result<(), eyre::Report> {
    let router = router_over(task_store.clone());

    send(&router, "/new").await?;
    send(&router, "Buy milk").await?;
    let reply = send(&router, "/skip").await?;

    let tasks = task_store.list_tasks(OWNER).await?;
    eyre::ensure!(tasks.len() == 1, "expected one task, found {}", tasks.len());
    let task = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("expected a stored task"))?;
    eyre::ensure!(task.description().as_str() == "Buy milk", "description mismatch");
    eyre::ensure!(task.deadline().is_none(), "deadline should be unset");
    eyre::ensure!(!task.is_done(), "new task should be pending");
    eyre::ensure!(reply.contains("Buy milk"), "confirmation should name the task");
    eyre::ensure!(router.stage(OWNER).await?.is_none(), "owner should be idle");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_deadline_can_be_retried(task_store: TestTaskStore) -> Result<(), eyre::Report> {
    let router = router_over(task_store.clone());

    send(&router, "/new").await?;
    send(&router, "Read").await?;
    send(&router, "not-a-date").await?;

    eyre::ensure!(
        router.stage(OWNER).await? == Some(DraftStage::AwaitingDeadline),
        "draft should still await its deadline"
    );
    eyre::ensure!(
        task_store.list_tasks(OWNER).await?.is_empty(),
        "no task should exist yet"
    );

    send(&router, "2025-06-01").await?;

    let tasks = task_store.list_tasks(OWNER).await?;
    let task = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("expected a stored task"))?;
    eyre::ensure!(
        task.deadline().map(|deadline| deadline.to_string()).as_deref() == Some("2025-06-01"),
        "deadline should be stored"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_draft_creates_nothing(
    task_store: TestTaskStore,
) -> Result<(), eyre::Report> {
    let router = router_over(task_store.clone());

    send(&router, "/new").await?;
    send(&router, "Draft idea").await?;
    send(&router, "/cancel").await?;
    let after = send(&router, "2025-06-01").await?;

    eyre::ensure!(
        task_store.list_tasks(OWNER).await?.is_empty(),
        "cancelled draft must not be stored"
    );
    eyre::ensure!(after.contains("/new"), "text after cancel should get the hint");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_renders_status_markers(router: TestRouter) -> Result<(), eyre::Report> {
    send(&router, "/add Buy milk").await?;
    send(&router, "/add Read").await?;
    send(&router, "/done 2").await?;

    let listing = send(&router, "/list").await?;

    eyre::ensure!(listing.contains("1. Buy milk ⏳"), "pending marker missing: {listing}");
    eyre::ensure!(listing.contains("2. Read ✅"), "done marker missing: {listing}");
    Ok(())
}
