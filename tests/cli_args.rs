//! Tests for CLI argument handling against the built binary.
//!
//! Only paths that exit before the terminal is taken over are exercised.

use std::process::Command;

fn carousel_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kpi-carousel"))
}

#[test]
fn test_help_lists_flags() {
    let output = carousel_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--assets-dir"));
}

#[test]
fn test_invalid_base_url_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = carousel_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--base-url")
        .arg("ftp://127.0.0.1")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
    assert!(stderr.contains("must use http or https"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = carousel_cmd()
        .arg("--backend")
        .arg("x")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--backend"));
}
