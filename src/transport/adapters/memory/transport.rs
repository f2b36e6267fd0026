//! Scripted transport that records every reply.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::router::Reply;
use crate::transport::{
    domain::{ChatId, InboundMessage, OutboundMessage},
    ports::{ChatTransport, TransportResult},
};

/// Thread-safe in-memory transport.
///
/// [`ChatTransport::receive`] drains every queued message and waits while the
/// queue is empty, like a long poll that never times out.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    inbound: Mutex<VecDeque<InboundMessage>>,
    arrived: Notify,
    outbound: Mutex<Vec<OutboundMessage>>,
}

impl InMemoryTransport {
    /// Creates an empty transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a message for the next receive.
    pub fn push(&self, message: InboundMessage) {
        lock(&self.inbound).push_back(message);
        self.arrived.notify_one();
    }

    /// Returns every reply sent so far, in send order.
    #[must_use]
    pub fn sent(&self) -> Vec<OutboundMessage> {
        lock(&self.outbound).clone()
    }
}

#[async_trait]
impl ChatTransport for InMemoryTransport {
    async fn receive(&self) -> TransportResult<Vec<InboundMessage>> {
        loop {
            let batch: Vec<InboundMessage> = lock(&self.inbound).drain(..).collect();
            if !batch.is_empty() {
                return Ok(batch);
            }
            self.arrived.notified().await;
        }
    }

    async fn send(&self, chat_id: ChatId, reply: &Reply) -> TransportResult<()> {
        lock(&self.outbound).push(OutboundMessage {
            chat_id,
            reply: reply.clone(),
        });
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
