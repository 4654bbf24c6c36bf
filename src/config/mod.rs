mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig, DEFAULT_USERS_URL};
