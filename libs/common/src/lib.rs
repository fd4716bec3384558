//! Common library for the WebContas front-end
//!
//! This crate provides shared functionality used by the WebContas
//! front-end crates, including configuration loading, error handling
//! and logging setup.

pub mod config;
pub mod error;
pub mod telemetry;

/// Example usage of the configuration module
///
/// ```rust,no_run
/// use common::config::SignupConfig;
/// use common::telemetry::init_tracing;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = SignupConfig::load()?;
///     config.validate()?;
///     init_tracing(&config.log_level)?;
///     println!("Registration endpoint: {}", config.api_base_url);
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
