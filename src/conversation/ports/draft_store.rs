//! Keyed storage of in-progress drafts, one per owner.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::conversation::domain::ConversationDraft;
use crate::task::domain::OwnerId;

/// Result type for draft store operations.
pub type DraftStoreResult<T> = Result<T, DraftStoreError>;

/// Draft storage contract.
///
/// Entries are keyed by owner, so at most one draft exists per owner and
/// saving a draft replaces any previous one.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Returns the owner's draft, if one is open.
    async fn load(&self, owner_id: OwnerId) -> DraftStoreResult<Option<ConversationDraft>>;

    /// Inserts or replaces the draft for its owner.
    async fn save(&self, draft: &ConversationDraft) -> DraftStoreResult<()>;

    /// Discards the owner's draft. Returns `true` when one existed.
    async fn remove(&self, owner_id: OwnerId) -> DraftStoreResult<bool>;
}

/// Errors returned by draft store implementations.
#[derive(Debug, Clone, Error)]
pub enum DraftStoreError {
    /// Storage-layer failure.
    #[error("draft storage error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DraftStoreError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
