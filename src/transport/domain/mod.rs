//! Messages exchanged with the chat network.

mod message;

pub use message::{ChatId, InboundMessage, OutboundMessage};
