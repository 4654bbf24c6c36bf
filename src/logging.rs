//! File-backed tracing setup. The TUI owns stdout, so logs go to a file.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{Config, LoggingConfig};

/// Install the global subscriber. Returns the log file path.
///
/// Precedence for the filter: `cli_level`, then `RUST_LOG`, then
/// `config.level`.
pub fn init(cli_level: Option<&str>, config: &LoggingConfig) -> io::Result<PathBuf> {
    let path = config.file.clone().unwrap_or_else(Config::default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(cli_level, &config.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(path)
}

pub fn resolve_filter(cli_level: Option<&str>, configured: &str) -> EnvFilter {
    if let Some(filter) = cli_level.and_then(|level| EnvFilter::try_new(level).ok()) {
        return filter;
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("info"))
}
