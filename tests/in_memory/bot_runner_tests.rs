//! The polling loop over the in-memory transport.

use std::sync::Arc;
use std::time::Duration;

use rstest::rstest;
use taskbot::{
    task::domain::OwnerId,
    transport::{
        adapters::memory::InMemoryTransport,
        domain::{ChatId, InboundMessage},
        services::BotRunner,
    },
};

use crate::in_memory::helpers::{TestRouter, router};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn guided_flow_over_transport(router: TestRouter) -> Result<(), eyre::Report> {
    let transport = Arc::new(InMemoryTransport::new());
    let runner = BotRunner::new(Arc::clone(&transport), router, Duration::from_millis(5));
    let owner = OwnerId::new(9);
    let chat = ChatId::new(900);

    for text in ["/new", "Buy milk", "/skip", "/list"] {
        transport.push(InboundMessage::new(owner, chat, text));
        runner.poll_once().await?;
    }

    let sent = transport.sent();
    eyre::ensure!(sent.len() == 4, "expected four replies, got {}", sent.len());
    eyre::ensure!(
        sent.iter().all(|message| message.chat_id == chat),
        "replies must go to the inbound chat"
    );
    let listing = sent
        .last()
        .ok_or_else(|| eyre::eyre!("expected a listing reply"))?;
    eyre::ensure!(
        listing.reply.text().contains("1. Buy milk ⏳"),
        "unexpected listing: {}",
        listing.reply.text()
    );
    Ok(())
}
