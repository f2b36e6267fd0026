//! Bot API wire types and response decoding.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::task::domain::OwnerId;
use crate::transport::{
    domain::{ChatId, InboundMessage},
    ports::{TransportError, TransportResult},
};

/// Envelope wrapping every Bot API response.
#[derive(Debug, Deserialize)]
pub(super) struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    error_code: Option<i64>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Update {
    update_id: i64,
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    chat: Chat,
    from: Option<User>,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct User {
    id: i64,
}

#[derive(Debug, Serialize)]
pub(super) struct GetUpdates<'a> {
    pub offset: i64,
    pub timeout: u64,
    pub allowed_updates: &'a [&'a str],
}

#[derive(Debug, Serialize)]
pub(super) struct SendMessage<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    pub parse_mode: &'a str,
}

/// Decodes a response body, turning `ok: false` into [`TransportError::Api`].
///
/// `status` is the HTTP status, reported when the body carries no error code.
pub(super) fn decode<T: DeserializeOwned>(status: u16, body: &str) -> TransportResult<T> {
    let response: ApiResponse<T> = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) if !(200..300).contains(&status) => {
            return Err(TransportError::Api {
                status: i64::from(status),
                description: body.trim().to_owned(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    match (response.ok, response.result) {
        (true, Some(result)) => Ok(result),
        (ok, _) => Err(TransportError::Api {
            status: response.error_code.unwrap_or_else(|| i64::from(status)),
            description: response.description.unwrap_or_else(|| {
                if ok {
                    "response carried no result".to_owned()
                } else {
                    "request rejected".to_owned()
                }
            }),
        }),
    }
}

/// Extracts text messages from a batch of updates.
///
/// Returns the messages together with the offset that acknowledges the whole
/// batch, or `None` when the batch was empty. Updates without text or sender
/// are acknowledged and skipped.
pub(super) fn collect_messages(updates: Vec<Update>) -> (Vec<InboundMessage>, Option<i64>) {
    let next_offset = updates
        .iter()
        .map(|update| update.update_id)
        .max()
        .map(|last| last + 1);

    let messages = updates
        .into_iter()
        .filter_map(|update| {
            let message = update.message?;
            let sender = message.from?;
            let text = message.text?;
            Some(InboundMessage::new(
                OwnerId::new(sender.id),
                ChatId::new(message.chat.id),
                text,
            ))
        })
        .collect();

    (messages, next_offset)
}
