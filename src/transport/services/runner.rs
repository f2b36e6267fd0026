//! Receive, route, reply loop.

use std::future::Future;
use std::pin::pin;
use std::sync::Arc;
use std::time::Duration;

use mockable::Clock;

use crate::conversation::ports::DraftStore;
use crate::router::{CommandRouter, Reply};
use crate::task::ports::TaskRepository;
use crate::transport::{
    domain::InboundMessage,
    ports::{ChatTransport, TransportResult},
};

/// Drives a [`CommandRouter`] from a [`ChatTransport`].
///
/// Messages in a batch are handled one at a time, in arrival order. A
/// message whose handling fails is answered with [`Reply::failure`]; the loop
/// itself only stops on shutdown.
pub struct BotRunner<T, D, R, C>
where
    T: ChatTransport,
    D: DraftStore,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    transport: Arc<T>,
    router: CommandRouter<D, R, C>,
    error_pause: Duration,
}

impl<T, D, R, C> BotRunner<T, D, R, C>
where
    T: ChatTransport,
    D: DraftStore,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a runner that waits `error_pause` after a failed receive.
    #[must_use]
    pub const fn new(
        transport: Arc<T>,
        router: CommandRouter<D, R, C>,
        error_pause: Duration,
    ) -> Self {
        Self {
            transport,
            router,
            error_pause,
        }
    }

    /// Receives one batch and answers every message in it.
    ///
    /// Returns the number of messages handled.
    ///
    /// # Errors
    ///
    /// Returns the transport error when receiving fails. Routing and send
    /// failures are logged and do not fail the batch.
    pub async fn poll_once(&self) -> TransportResult<usize> {
        let batch = self.transport.receive().await?;
        self.handle_batch(&batch).await;
        Ok(batch.len())
    }

    /// Polls until `shutdown` completes.
    ///
    /// A batch already received is answered in full before the loop checks
    /// for shutdown again.
    pub async fn run_until<F>(&self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let mut shutdown = pin!(shutdown);
        tracing::info!("bot runner started");
        loop {
            let received = tokio::select! {
                () = &mut shutdown => break,
                received = self.transport.receive() => received,
            };
            match received {
                Ok(batch) => self.handle_batch(&batch).await,
                Err(err) => {
                    tracing::warn!(error = %err, pause = ?self.error_pause, "receiving updates failed");
                    tokio::select! {
                        () = &mut shutdown => break,
                        () = tokio::time::sleep(self.error_pause) => {}
                    }
                }
            }
        }
        tracing::info!("bot runner stopped");
    }

    async fn handle_batch(&self, batch: &[InboundMessage]) {
        for message in batch {
            let reply = match self.router.handle(message.owner_id, &message.text).await {
                Ok(reply) => reply,
                Err(err) => {
                    tracing::error!(
                        error = %err,
                        owner_id = %message.owner_id,
                        "failed to handle message"
                    );
                    Reply::failure()
                }
            };
            if let Err(err) = self.transport.send(message.chat_id, &reply).await {
                tracing::warn!(error = %err, chat_id = %message.chat_id, "failed to send reply");
            }
        }
    }
}
