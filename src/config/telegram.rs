//! Telegram Bot API settings.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::database::redacted;

const fn default_poll_timeout_secs() -> u64 {
    30
}

const fn default_error_pause_ms() -> u64 {
    1000
}

fn default_api_base_url() -> String {
    "https://api.telegram.org".to_owned()
}

/// Bot credentials and polling behaviour.
#[derive(Clone, Deserialize, Serialize)]
pub struct TelegramConfig {
    /// Token issued by `@BotFather`.
    #[serde(default)]
    pub bot_token: String,
    /// Bot API root, without the `/bot<token>` suffix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Long-poll timeout passed to `getUpdates`, in seconds.
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
    /// Pause after a failed poll, in milliseconds.
    #[serde(default = "default_error_pause_ms")]
    pub error_pause_ms: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            api_base_url: default_api_base_url(),
            poll_timeout_secs: default_poll_timeout_secs(),
            error_pause_ms: default_error_pause_ms(),
        }
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &redacted(&self.bot_token))
            .field("api_base_url", &self.api_base_url)
            .field("poll_timeout_secs", &self.poll_timeout_secs)
            .field("error_pause_ms", &self.error_pause_ms)
            .finish()
    }
}

impl TelegramConfig {
    /// Long-poll timeout as a duration.
    #[must_use]
    pub const fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout_secs)
    }

    /// Pause after a failed poll as a duration.
    #[must_use]
    pub const fn error_pause(&self) -> Duration {
        Duration::from_millis(self.error_pause_ms)
    }
}
