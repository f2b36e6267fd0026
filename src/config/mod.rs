//! Layered configuration for the bot process.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults.
//! 2. A TOML file: the path in `TASKBOT_CONFIG`, else `taskbot.toml` in the
//!    working directory when present.
//! 3. The plain variables understood by earlier deployments: `BOT_TOKEN`,
//!    `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_PORT` and `DB_NAME`.
//! 4. `TASKBOT_*` variables, with `__` separating sections
//!    (`TASKBOT_TELEGRAM__BOT_TOKEN` sets `telegram.bot_token`).
//!
//! [`BotConfig::load_with_dotenv`] reads a `.env` file into the process
//! environment before the sources are merged.

mod conversation;
mod database;
mod error;
mod telegram;


pub use conversation::ConversationConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use telegram::TelegramConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "TASKBOT_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "taskbot.toml";
const ENV_PREFIX: &str = "TASKBOT_";

const LEGACY_ENV: [(&str, &str); 6] = [
    ("BOT_TOKEN", "telegram.bot_token"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_NAME", "database.name"),
];

fn default_log_level() -> String {
    "info".to_owned()
}

/// Complete process configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    /// Task database.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Bot API access.
    #[serde(default)]
    pub telegram: TelegramConfig,
    /// Guided task form.
    #[serde(default)]
    pub conversation: ConversationConfig,
    /// Default `tracing` filter, overridden by `TASKBOT_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            telegram: TelegramConfig::default(),
            conversation: ConversationConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl BotConfig {
    /// Loads and validates configuration from every source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Extract`] when a source is malformed, and
    /// [`ConfigError::Missing`] or [`ConfigError::Invalid`] when validation
    /// fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment()?.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `.env` from the working directory, then calls [`Self::load`].
    ///
    /// A missing `.env` file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Dotenv`] when `.env` exists but cannot be
    /// parsed, and any error from [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }
        Self::load()
    }

    /// Builds the layered provider chain without extracting it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `TASKBOT_CONFIG` names a file
    /// that does not exist.
    pub fn figment() -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = config_file()? {
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment
            .merge(legacy_env())
            .merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Checks values that every deployment needs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for an empty bot token or database
    /// location, and [`ConfigError::Invalid`] for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.telegram.bot_token.trim().is_empty() {
            return Err(ConfigError::Missing {
                field: "telegram.bot_token",
            });
        }
        self.database.connection_url()?;
        if self.database.pool_size == 0 {
            return Err(ConfigError::Invalid {
                field: "database.pool_size",
                reason: "must be at least 1".to_owned(),
            });
        }
        if self.conversation.draft_ttl_secs == Some(0) {
            return Err(ConfigError::Invalid {
                field: "conversation.draft_ttl_secs",
                reason: "must be at least 1 when set".to_owned(),
            });
        }
        Ok(())
    }
}

fn config_file() -> Result<Option<PathBuf>, ConfigError> {
    if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV) {
        let path = PathBuf::from(explicit);
        if !path.is_file() {
            return Err(ConfigError::Invalid {
                field: CONFIG_PATH_ENV,
                reason: format!("{} is not a file", path.display()),
            });
        }
        return Ok(Some(path));
    }
    let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
    Ok(fallback.is_file().then_some(fallback))
}

fn legacy_env() -> Env {
    let names = LEGACY_ENV.map(|(name, _)| name);
    Env::raw().only(&names).map(|key| {
        LEGACY_ENV
            .iter()
            .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
            .map_or_else(|| key.as_str().to_owned(), |(_, path)| (*path).to_owned())
            .into()
    })
}
