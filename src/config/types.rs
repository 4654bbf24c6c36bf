use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full URL of the users listing.
    #[serde(default = "default_users_url")]
    pub users_url: String,
    /// Total request timeout. Absent means the request may wait indefinitely.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw / spinner tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when neither the CLI nor `RUST_LOG` set one.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to the platform data dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_users_url() -> String {
    DEFAULT_USERS_URL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            users_url: default_users_url(),
            timeout_seconds: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
