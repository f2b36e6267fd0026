//! Inbound and outbound message envelopes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::router::Reply;
use crate::task::domain::OwnerId;

/// Identifier of the chat a reply is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(i64);

impl ChatId {
    /// Wraps a raw chat identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw chat identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A text message received from a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Sender, used as the owner of tasks and drafts.
    pub owner_id: OwnerId,
    /// Chat the reply goes back to.
    pub chat_id: ChatId,
    /// Raw message text.
    pub text: String,
}

impl InboundMessage {
    /// Creates an inbound message.
    #[must_use]
    pub fn new(owner_id: OwnerId, chat_id: ChatId, text: impl Into<String>) -> Self {
        Self {
            owner_id,
            chat_id,
            text: text.into(),
        }
    }
}

/// A reply that was handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Destination chat.
    pub chat_id: ChatId,
    /// Reply body.
    pub reply: Reply,
}
