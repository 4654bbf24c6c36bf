//! Runs the built binary for flags that exit before the terminal UI starts.

use std::process::Command;

fn userdesk_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_userdesk"))
}

#[test]
fn test_help_lists_options() {
    let output = userdesk_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--url"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-level"));
}

#[test]
fn test_version_matches_package() {
    let output = userdesk_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_config_file_fails_before_ui() {
    let output = userdesk_cmd()
        .arg("--config")
        .arg("/nonexistent/userdesk-config.toml")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loading configuration"), "{}", stderr);
}

#[test]
fn test_bad_url_fails_before_ui() {
    let output = userdesk_cmd()
        .args(["--url", "ftp://example.com/users"])
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("userdesk-cli-test"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("http or https"), "{}", stderr);
}
