//! Chat transport port.

use async_trait::async_trait;
use thiserror::Error;

use crate::router::Reply;
use crate::transport::domain::{ChatId, InboundMessage};

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Source of inbound messages and sink for replies.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Waits for the next batch of inbound text messages.
    ///
    /// An empty batch is valid and means the wait timed out.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the network or the remote API fails.
    async fn receive(&self) -> TransportResult<Vec<InboundMessage>>;

    /// Sends a reply to a chat.
    ///
    /// Replies too long for one chat message go out as
    /// [`Reply::messages`], in order.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the reply cannot be delivered.
    async fn send(&self, chat_id: ChatId, reply: &Reply) -> TransportResult<()>;
}

/// Errors returned by chat transports.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The remote API rejected the request.
    #[error("API error ({status}): {description}")]
    Api {
        /// Error code reported by the API, or the HTTP status.
        status: i64,
        /// Error description reported by the API.
        description: String,
    },
    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
