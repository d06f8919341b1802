//! End-to-end CLI tests
//!
//! Each invocation gets its own scratch config directory via
//! DESK_BLUETOOTH_CONFIG_DIR so a developer's real configuration never
//! leaks into the tests.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

fn cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("desk-bluetooth").unwrap();
    cmd.env("DESK_BLUETOOTH_CONFIG_DIR", config_dir);
    cmd.env_remove("DESK_BLUETOOTH_LOG_CONSOLE");
    cmd.env_remove("DESK_BLUETOOTH_LOG_VERBOSE");
    cmd.env_remove("DESK_BLUETOOTH_LOG_LEVEL");
    cmd
}

fn get_stdout(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_root_prints_help() {
    let dir = TempDir::new().unwrap();
    let assert = cmd(dir.path()).assert().success();
    let stdout = get_stdout(&assert);
    assert!(stdout.contains("Usage"), "help text expected: {stdout}");
    assert!(stdout.contains("version"));
}

#[test]
fn test_version_prints_build_report() {
    let dir = TempDir::new().unwrap();
    let assert = cmd(dir.path()).arg("version").assert().success();
    let stdout = get_stdout(&assert);
    assert!(!stdout.trim().is_empty());
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    assert!(stdout.contains("commit:"));
}

#[test]
fn test_missing_default_config_uses_defaults() {
    // empty config dir: resolution succeeds, nothing fatal
    let dir = TempDir::new().unwrap();
    cmd(dir.path()).arg("version").assert().success();
}

#[test]
fn test_valid_config_file_at_default_location() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.yaml"),
        "log:\n  console: true\n  level: warn\n",
    )
    .unwrap();
    cmd(dir.path()).arg("version").assert().success();
}

#[test]
fn test_missing_explicit_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    let assert = cmd(dir.path())
        .args(["-c", "/nonexistent/desk-bluetooth.yaml", "version"])
        .assert()
        .code(1);
    // the fatal error is logged as a structured record on stdout
    let stdout = get_stdout(&assert);
    assert!(stdout.contains("exiting from fatal error"), "{stdout}");
    assert!(stdout.contains("\"severity\":\"error\""), "{stdout}");
}

#[test]
fn test_malformed_explicit_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("broken.yaml");
    fs::write(&bad, "log: [broken\n").unwrap();
    cmd(dir.path())
        .args(["-c", bad.to_str().unwrap(), "version"])
        .assert()
        .code(1);
}

#[test]
fn test_malformed_default_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.yaml"), "log: [broken\n").unwrap();
    cmd(dir.path()).arg("version").assert().code(1);
}

#[test]
fn test_config_show_prints_effective_yaml() {
    // verbose config forces debug severity; stdout must still be a single
    // parseable YAML document with no log records mixed in
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.yaml"), "log:\n  verbose: true\n").unwrap();
    let assert = cmd(dir.path()).args(["config", "show"]).assert().success();
    let stdout = get_stdout(&assert);
    let shown: serde_yaml::Value = serde_yaml::from_str(&stdout).unwrap();
    assert_eq!(shown["log"]["verbose"], serde_yaml::Value::Bool(true));
    assert_eq!(
        shown["name"],
        serde_yaml::Value::String("desk-bluetooth".to_string())
    );
}

#[test]
fn test_flag_overrides_file_in_config_show() {
    // file says no console logging, the explicit flag wins
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.yaml"), "log:\n  console: false\n").unwrap();
    let assert = cmd(dir.path())
        .args(["--console", "config", "show"])
        .assert()
        .success();
    let shown: serde_yaml::Value = serde_yaml::from_str(&get_stdout(&assert)).unwrap();
    assert_eq!(shown["log"]["console"], serde_yaml::Value::Bool(true));
}

#[test]
fn test_env_overrides_file_in_config_show() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.yaml"), "log:\n  level: debug\n").unwrap();
    let assert = cmd(dir.path())
        .env("DESK_BLUETOOTH_LOG_LEVEL", "error")
        .args(["config", "show"])
        .assert()
        .success();
    let shown: serde_yaml::Value = serde_yaml::from_str(&get_stdout(&assert)).unwrap();
    assert_eq!(
        shown["log"]["level"],
        serde_yaml::Value::String("error".to_string())
    );
}

#[test]
fn test_config_path_points_at_config_yaml() {
    let dir = TempDir::new().unwrap();
    let assert = cmd(dir.path()).args(["config", "path"]).assert().success();
    let stdout = get_stdout(&assert);
    assert!(stdout.trim().ends_with("config.yaml"), "{stdout}");
}

#[test]
fn test_config_validate() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.yaml"), "log:\n  level: info\n").unwrap();
    let assert = cmd(dir.path())
        .args(["config", "validate"])
        .assert()
        .success();
    assert!(get_stdout(&assert).contains("valid"));

    fs::write(dir.path().join("config.yaml"), "{{{{").unwrap();
    cmd(dir.path()).args(["config", "validate"]).assert().code(1);
}

#[test]
fn test_verbose_flag_enables_debug_records() {
    let dir = TempDir::new().unwrap();
    let assert = cmd(dir.path()).args(["-v", "version"]).assert().success();
    let stdout = get_stdout(&assert);
    // the post-resolution debug line only appears at debug severity
    assert!(stdout.contains("configuration loaded"), "{stdout}");
    assert!(stdout.contains("\"severity\":\"debug\""), "{stdout}");
}

#[test]
fn test_default_severity_hides_debug_records() {
    let dir = TempDir::new().unwrap();
    let assert = cmd(dir.path()).arg("version").assert().success();
    assert!(!get_stdout(&assert).contains("configuration loaded"));
}
