//! Tracing subscriber initialisation.

use crate::config::{ConfigError, LogLevel};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `level` is used as the
/// filter. Returns an error if a global subscriber is already installed.
pub fn init_tracing(level: LogLevel) -> Result<(), ConfigError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init()
        .map_err(|e| ConfigError::Telemetry(e.to_string()))
}
