use std::fs;
use tempfile::TempDir;
use userdesk::config::{Config, ConfigError, DEFAULT_USERS_URL};

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.api.users_url, DEFAULT_USERS_URL);
    assert_eq!(config.api.timeout_seconds, None);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("userdesk/config.toml"));
}

#[test]
fn test_default_log_path_ends_with_expected() {
    let path = Config::default_log_path();
    assert!(path.ends_with("userdesk/userdesk.log"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_empty_file_yields_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_file_is_parsed() {
    let (_dir, path) = write_config(
        r#"
[api]
users_url = "http://localhost:3000/users"
timeout_seconds = 10

[ui]
tick_rate_ms = 100

[logging]
level = "userdesk=debug"
file = "/tmp/userdesk-test.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.users_url, "http://localhost:3000/users");
    assert_eq!(config.api.timeout_seconds, Some(10));
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.logging.level, "userdesk=debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/userdesk-test.log"))
    );
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let (_dir, path) = write_config("[api]\ntimeout_seconds = 3\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.users_url, DEFAULT_USERS_URL);
    assert_eq!(config.api.timeout_seconds, Some(3));
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nusers_url = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_invalid_url_is_validation_error() {
    let (_dir, path) = write_config("[api]\nusers_url = \"users\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("Invalid users_url"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}
