use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `<config_dir>/userdesk/config.toml`, or `./userdesk/config.toml` when
    /// the platform has no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("userdesk").join("config.toml")
    }

    /// `<data_local_dir>/userdesk/userdesk.log`.
    pub fn default_log_path() -> PathBuf {
        let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("userdesk").join("userdesk.log")
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`. A missing file yields `Config::default()`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - users URL is an absolute http(s) URL
    /// - tick rate is non-zero
    /// - timeout, when set, is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api.users_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid users_url '{}': {}", self.api.users_url, e),
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "users_url must use http or https, got '{}'",
                    url.scheme()
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.api.timeout_seconds == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "timeout_seconds must be greater than zero when set".to_string(),
            });
        }

        Ok(())
    }
}
