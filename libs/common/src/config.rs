//! Configuration for the sign-up front-end
//!
//! Values are layered: built-in defaults, then an optional
//! `config/signup.toml`, then `SIGNUP_*` environment variables.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Default location of the optional configuration file (without extension)
pub const DEFAULT_CONFIG_FILE: &str = "config/signup";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "SIGNUP";

/// Sign-up front-end configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SignupConfig {
    /// Base URL of the registration API (e.g., "http://localhost:3333")
    pub api_base_url: String,
    /// Timeout applied to every registration request, in seconds
    pub request_timeout_secs: u64,
    /// Require the birth date to be a real DD/MM/YYYY date before submitting
    pub strict_birth_date: bool,
    /// Log level or `tracing-subscriber` filter directive
    pub log_level: String,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3333".to_string(),
            request_timeout_secs: 30,
            strict_birth_date: true,
            log_level: "info".to_string(),
        }
    }
}

impl SignupConfig {
    /// Load the configuration from the default file and the environment
    ///
    /// # Environment Variables
    /// - `SIGNUP_API_BASE_URL`: Registration API base URL (default: "http://localhost:3333")
    /// - `SIGNUP_REQUEST_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
    /// - `SIGNUP_STRICT_BIRTH_DATE`: Validate the birth date format (default: true)
    /// - `SIGNUP_LOG_LEVEL`: Log level (default: "info")
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load the configuration using `file` as the optional configuration file
    pub fn load_from(file: &str) -> ConfigResult<Self> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("api_base_url", defaults.api_base_url)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs as i64)?
            .set_default("strict_birth_date", defaults.strict_birth_date)?
            .set_default("log_level", defaults.log_level)?
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        debug!("Loaded sign-up configuration: {:?}", config);

        Ok(config)
    }

    /// Check that the loaded values are usable
    pub fn validate(&self) -> ConfigResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "api_base_url must not be empty".to_string(),
            ));
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
