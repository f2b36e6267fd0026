//! Command routing between the chat transport and the task services.
//!
//! Inbound text is parsed into a [`Command`] or plain text. Plain text feeds
//! the owner's open draft; commands dispatch to the task store or the
//! conversation service. Validation and lookup failures become user-facing
//! replies; only storage failures escape as [`RouterError`].

mod command;
mod reply;
mod service;

pub use command::{Command, Inbound};
pub use reply::{MESSAGE_LIMIT, PREVIEW_CHARS, Reply, ReplyRenderer};
pub use service::{CommandRouter, RouterError, RouterResult};
