//! Logging setup shared by the front-end binaries

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::{ConfigError, ConfigResult};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `level` when it is set.
pub fn init_tracing(level: &str) -> ConfigResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| ConfigError::Invalid(format!("Invalid log level '{}': {}", level, e)))?,
    };

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ConfigError::Telemetry(e.to_string()))
}
