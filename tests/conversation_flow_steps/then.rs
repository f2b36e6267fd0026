//! Then steps for guided task creation scenarios.

use super::world::{ConversationWorld, run_async};
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::then;
use taskbot::{conversation::domain::DraftStage, task::domain::Task};

fn latest_task(world: &ConversationWorld) -> Result<Task, eyre::Report> {
    run_async(world.tasks.list_tasks(world.user))
        .wrap_err("list tasks")?
        .pop()
        .ok_or_else(|| eyre!("user has no tasks"))
}

#[then("the task count is {count:usize}")]
fn task_count_is(world: &ConversationWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = run_async(world.tasks.list_tasks(world.user)).wrap_err("list tasks")?;
    eyre::ensure!(
        tasks.len() == count,
        "expected {count} tasks, found {}",
        tasks.len()
    );
    Ok(())
}

#[then(r#"the latest task is described as "{description}""#)]
fn latest_task_described_as(
    world: &ConversationWorld,
    description: String,
) -> Result<(), eyre::Report> {
    let task = latest_task(world)?;
    eyre::ensure!(
        task.description().as_str() == description,
        "expected description {description:?}, found {:?}",
        task.description().as_str()
    );
    Ok(())
}

#[then("the latest task has no deadline")]
fn latest_task_has_no_deadline(world: &ConversationWorld) -> Result<(), eyre::Report> {
    let task = latest_task(world)?;
    eyre::ensure!(
        task.deadline().is_none(),
        "unexpected deadline {:?}",
        task.deadline()
    );
    Ok(())
}

#[then(r#"the latest task is due "{date}""#)]
fn latest_task_is_due(world: &ConversationWorld, date: String) -> Result<(), eyre::Report> {
    let task = latest_task(world)?;
    let due = task.deadline().map(|deadline| deadline.to_string());
    eyre::ensure!(
        due.as_deref() == Some(date.as_str()),
        "expected deadline {date}, found {due:?}"
    );
    Ok(())
}

#[then("the user has no open draft")]
fn user_has_no_open_draft(world: &ConversationWorld) -> Result<(), eyre::Report> {
    let stage = run_async(world.router.stage(world.user)).wrap_err("look up draft stage")?;
    eyre::ensure!(stage.is_none(), "unexpected open draft in stage {stage:?}");
    Ok(())
}

#[then("the draft awaits a deadline")]
fn draft_awaits_deadline(world: &ConversationWorld) -> Result<(), eyre::Report> {
    let stage = run_async(world.router.stage(world.user)).wrap_err("look up draft stage")?;
    eyre::ensure!(
        stage == Some(DraftStage::AwaitingDeadline),
        "expected the deadline step, found {stage:?}"
    );
    Ok(())
}

#[then("the other user's draft awaits a description")]
fn other_draft_awaits_description(world: &ConversationWorld) -> Result<(), eyre::Report> {
    let stage =
        run_async(world.router.stage(world.other_user)).wrap_err("look up draft stage")?;
    eyre::ensure!(
        stage == Some(DraftStage::AwaitingDescription),
        "expected the description step, found {stage:?}"
    );
    Ok(())
}

#[then(r#"the last reply mentions "{fragment}""#)]
fn last_reply_mentions(world: &ConversationWorld, fragment: String) -> Result<(), eyre::Report> {
    let reply = world
        .last_reply
        .as_deref()
        .ok_or_else(|| eyre!("no reply recorded"))?;
    eyre::ensure!(
        reply.contains(&fragment),
        "reply {reply:?} does not mention {fragment:?}"
    );
    Ok(())
}
