//! Tests for CLI argument parsing and error reporting of the binary.

mod common;

use common::{temp_config, unreachable_base_url};
use std::process::Command;

fn favreel_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_favreel"));
    cmd.env_remove("FAVREEL_API_URL").env_remove("FAVREEL_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let output = favreel_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    for needle in ["--api-url", "--config", "browse", "list", "add", "update", "delete"] {
        assert!(stdout.contains(needle), "missing {} in help: {}", needle, stdout);
    }
}

#[test]
fn test_add_help_shows_entry_flags() {
    let output = favreel_cmd()
        .args(["add", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--title"));
    assert!(stdout.contains("--year-time"));
    assert!(stdout.contains("tv-show"));
}

#[test]
fn test_invalid_type_is_rejected_by_clap() {
    let output = favreel_cmd()
        .args(["add", "--title", "Dune", "--type", "documentary"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"), "got: {}", stderr);
}

#[test]
fn test_invalid_api_url_exits_with_error() {
    let output = favreel_cmd()
        .args(["--api-url", "not-a-url", "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"), "got: {}", stderr);
}

#[test]
fn test_unreachable_backend_reports_network_error() {
    let (_dir, path) = temp_config("");
    let output = favreel_cmd()
        .arg("--config")
        .arg(&path)
        .args(["--api-url", &unreachable_base_url(), "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Network error"), "got: {}", stderr);
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = favreel_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["--api-url", &unreachable_base_url(), "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to read config file"), "got: {}", stderr);
}

#[test]
fn test_env_url_is_used_when_no_flag() {
    let output = favreel_cmd()
        .env("FAVREEL_API_URL", "gopher://old.example")
        .args(["delete", "1"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("gopher://old.example"), "got: {}", stderr);
}
