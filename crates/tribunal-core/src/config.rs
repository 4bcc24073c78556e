//! Configuration management for the tribunal dashboard

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Origin used when neither configuration nor `API_BASE` names one
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the dispute service, without a trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    std::env::var("API_BASE")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

const fn default_request_timeout() -> u64 {
    15
}

const fn default_connect_timeout() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ApiConfig {
    /// Base URL with any trailing slash removed
    #[must_use]
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Config {
    /// Load configuration from `tribunal.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file when given
    ///
    /// Environment variables use the `TRIBUNAL` prefix with `__` between
    /// levels, e.g. `TRIBUNAL__API__BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load_from(path: Option<&Path>) -> crate::Result<Self> {
        let file = path.map_or_else(
            || config::File::with_name("tribunal").required(false),
            |path| config::File::from(path).required(true),
        );

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("TRIBUNAL")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        debug!(base_url = %config.api.base_url, "Configuration loaded");
        Ok(config)
    }

    /// Check values that serde cannot
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unparsable base URL, a base URL
    /// that is not http(s), or a zero timeout.
    pub fn validate(&self) -> crate::Result<()> {
        let url = url::Url::parse(&self.api.base_url).map_err(|e| crate::Error::Configuration {
            message: format!("api.base_url '{}' is not a valid URL: {e}", self.api.base_url),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(crate::Error::Configuration {
                message: format!("api.base_url must use http or https, got '{}'", url.scheme()),
            });
        }

        if self.api.request_timeout_secs == 0 {
            return Err(crate::Error::Configuration {
                message: "api.request_timeout_secs must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
