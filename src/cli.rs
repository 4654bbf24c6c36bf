use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "userdesk",
    version,
    about = "Browse and edit a remote user list in the terminal"
)]
pub struct Cli {
    /// Users endpoint fetched on startup (overrides config)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Config file [default: <config_dir>/userdesk/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Log file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "userdesk=trace" (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the config file, apply flag overrides, validate the result.
    ///
    /// The default location may be absent (defaults apply). A path given with
    /// `--config` must exist.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) if !path.exists() => {
                return Err(ConfigError::ReadError {
                    path: path.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "file does not exist"),
                });
            }
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.api.users_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = Some(timeout);
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
