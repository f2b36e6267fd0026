//! Structured logging setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Variable holding an `EnvFilter` directive that overrides the configured
/// level, for example `TASKBOT_LOG=taskbot=debug,reqwest=warn`.
pub const LOG_ENV: &str = "TASKBOT_LOG";

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(Box<dyn std::error::Error + Send + Sync>),
}

/// Builds the event filter.
///
/// A valid `TASKBOT_LOG` wins; otherwise `default_level` is used.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when `default_level` is not a valid
/// directive and `TASKBOT_LOG` does not supply one.
pub fn filter(default_level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(TelemetryError::from)
}

/// Installs a formatting subscriber writing to standard error.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(default_level: &str) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_level)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(TelemetryError::Install)
}
