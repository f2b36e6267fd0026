//! In-memory implementation of the `DraftStore` port.
//!
//! Drafts are lost on restart, which is acceptable for a guided form that
//! takes a few messages to complete.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::conversation::{
    domain::ConversationDraft,
    ports::{DraftStore, DraftStoreError, DraftStoreResult},
};
use crate::task::domain::OwnerId;

/// In-memory implementation of [`DraftStore`].
///
/// Thread-safe via internal [`RwLock`]; owners never contend on each other's
/// entries beyond the map lock itself.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDraftStore {
    drafts: Arc<RwLock<HashMap<OwnerId, ConversationDraft>>>,
}

impl InMemoryDraftStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of open drafts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drafts.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no drafts are open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_error(err: impl ToString) -> DraftStoreError {
    DraftStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl DraftStore for InMemoryDraftStore {
    async fn load(&self, owner_id: OwnerId) -> DraftStoreResult<Option<ConversationDraft>> {
        let guard = self.drafts.read().map_err(lock_error)?;
        Ok(guard.get(&owner_id).cloned())
    }

    async fn save(&self, draft: &ConversationDraft) -> DraftStoreResult<()> {
        let mut guard = self.drafts.write().map_err(lock_error)?;
        guard.insert(draft.owner_id(), draft.clone());
        Ok(())
    }

    async fn remove(&self, owner_id: OwnerId) -> DraftStoreResult<bool> {
        let mut guard = self.drafts.write().map_err(lock_error)?;
        Ok(guard.remove(&owner_id).is_some())
    }
}
