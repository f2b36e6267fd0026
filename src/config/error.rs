//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment could not merge or extract the layered sources.
    #[error("configuration error: {0}")]
    Extract(#[from] Box<figment::Error>),
    /// A `.env` file exists but could not be read.
    #[error("failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    /// A required value is not set in any source.
    #[error("missing required configuration value '{field}'")]
    Missing {
        /// Dotted path of the missing value.
        field: &'static str,
    },
    /// A value is set but unusable.
    #[error("invalid configuration value for '{field}': {reason}")]
    Invalid {
        /// Dotted path of the invalid value.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(Box::new(err))
    }
}
