//! Guided task form settings.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Draft expiry policy.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConversationConfig {
    /// Seconds of inactivity after which an open draft is discarded.
    /// Drafts never expire when unset.
    #[serde(default)]
    pub draft_ttl_secs: Option<u64>,
}

impl ConversationConfig {
    /// Returns the idle time-to-live, if one is configured.
    #[must_use]
    pub fn draft_ttl(&self) -> Option<TimeDelta> {
        self.draft_ttl_secs
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(TimeDelta::try_seconds)
    }
}
