//! Chat transport: delivery of inbound messages and outbound replies.
//!
//! The [`ports::ChatTransport`] port hides the messaging network. The
//! Telegram adapter long-polls the Bot API; the in-memory adapter replays a
//! scripted queue for tests. [`services::BotRunner`] connects a transport to
//! the [`crate::router::CommandRouter`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
