//! Long-polling Bot API client.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use super::api::{self, GetUpdates, SendMessage, Update};
use crate::router::Reply;
use crate::transport::{
    domain::{ChatId, InboundMessage},
    ports::{ChatTransport, TransportError, TransportResult},
};

const ALLOWED_UPDATES: &[&str] = &["message"];
const PARSE_MODE: &str = "HTML";
const REQUEST_MARGIN: Duration = Duration::from_secs(10);

/// Transport backed by the Telegram Bot API.
///
/// Updates are fetched with `getUpdates` long polling. Each batch is
/// acknowledged on the next poll by advancing the offset past the last
/// update id, so a message is delivered at most once per process.
pub struct TelegramTransport {
    client: reqwest::Client,
    endpoint: String,
    poll_timeout: Duration,
    offset: AtomicI64,
}

impl fmt::Debug for TelegramTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramTransport")
            .field("endpoint", &"<redacted>")
            .field("poll_timeout", &self.poll_timeout)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl TelegramTransport {
    /// Creates a client for the bot identified by `bot_token`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] when the HTTP client cannot be built.
    pub fn new(
        api_base_url: &str,
        bot_token: &str,
        poll_timeout: Duration,
    ) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(poll_timeout + REQUEST_MARGIN)
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/bot{bot_token}", api_base_url.trim_end_matches('/')),
            poll_timeout,
            offset: AtomicI64::new(0),
        })
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> TransportResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}/{method}", self.endpoint))
            .json(body)
            .send()
            .await
            .map_err(redact)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(redact)?;
        api::decode(status, &text)
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn receive(&self) -> TransportResult<Vec<InboundMessage>> {
        let request = GetUpdates {
            offset: self.offset.load(Ordering::Acquire),
            timeout: self.poll_timeout.as_secs(),
            allowed_updates: ALLOWED_UPDATES,
        };
        let updates: Vec<Update> = self.call("getUpdates", &request).await?;
        let (messages, next_offset) = api::collect_messages(updates);
        if let Some(next) = next_offset {
            self.offset.fetch_max(next, Ordering::AcqRel);
        }
        tracing::debug!(received = messages.len(), "polled updates");
        Ok(messages)
    }

    async fn send(&self, chat_id: ChatId, reply: &Reply) -> TransportResult<()> {
        for text in reply.messages() {
            let request = SendMessage {
                chat_id: chat_id.value(),
                text: &text,
                parse_mode: PARSE_MODE,
            };
            let _sent: serde_json::Value = self.call("sendMessage", &request).await?;
        }
        Ok(())
    }
}

/// Strips the request URL, which embeds the bot token, from HTTP errors.
fn redact(err: reqwest::Error) -> TransportError {
    TransportError::Http(err.without_url())
}
