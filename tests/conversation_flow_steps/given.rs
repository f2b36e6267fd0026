//! Given steps for guided task creation scenarios.

use super::world::{ConversationWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an idle user")]
fn idle_user(world: &mut ConversationWorld) -> Result<(), eyre::Report> {
    let stage = run_async(world.router.stage(world.user)).wrap_err("look up draft stage")?;
    eyre::ensure!(stage.is_none(), "user should start without a draft");
    Ok(())
}

#[given("another user has started a draft")]
fn other_user_started_draft(world: &mut ConversationWorld) -> Result<(), eyre::Report> {
    run_async(world.router.handle(world.other_user, "/new"))
        .wrap_err("start draft for the other user")?;
    Ok(())
}
