//! Custom error types for the common library
//!
//! This module defines the error types raised while loading configuration
//! and setting up logging.

use thiserror::Error;

/// Custom error type for configuration and startup
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error occurred while reading configuration sources
    #[error("Configuration load error: {0}")]
    Load(#[from] config::ConfigError),

    /// A configuration value was read but is not acceptable
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Error occurred while installing the tracing subscriber
    #[error("Telemetry initialization error: {0}")]
    Telemetry(String),
}

/// Type alias for Result with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
