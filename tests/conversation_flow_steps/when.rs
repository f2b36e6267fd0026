//! When steps for guided task creation scenarios.

use super::world::{ConversationWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the user sends "{text}""#)]
fn user_sends(world: &mut ConversationWorld, text: String) -> Result<(), eyre::Report> {
    let reply = run_async(world.router.handle(world.user, &text))
        .wrap_err_with(|| format!("route {text:?}"))?;
    world.last_reply = Some(reply.text().to_owned());
    Ok(())
}
