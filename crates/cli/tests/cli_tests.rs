//! CLI integration tests

use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("recommendations.json")
}

/// Run the `ros` binary with an isolated config and no colors
fn ros(args: &[&str]) -> Output {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    Command::new(env!("CARGO_BIN_EXE_ros"))
        .args(args)
        .env("ROS_CONFIG", config_dir.path().join("config.json"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = ros(&["--help"]);
    let stdout = stdout(&output);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(stdout.contains("Resource Optimization"), "Should show app name");
    assert!(stdout.contains("breakdown"), "Should show breakdown command");
    assert!(stdout.contains("variations"), "Should show variations command");
    assert!(stdout.contains("list"), "Should show list command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = ros(&["--version"]);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout(&output).contains("ros"), "Should show binary name");
}

/// Test breakdown subcommand help
#[test]
fn test_breakdown_help() {
    let output = ros(&["breakdown", "--help"]);
    let stdout = stdout(&output);

    assert!(output.status.success(), "Breakdown help should succeed");
    assert!(stdout.contains("--interval"), "Should show interval option");
    assert!(stdout.contains("--engine"), "Should show engine option");
    assert!(stdout.contains("--id"), "Should show id option");
}

#[test]
fn test_breakdown_table() {
    let file = fixture();
    let output = ros(&["breakdown", file.to_str().unwrap()]);
    let stdout = stdout(&output);

    assert!(output.status.success(), "Breakdown should succeed");
    assert!(stdout.contains("Current configuration: api-server"));
    assert!(stdout.contains("cpu: 100m"));
    assert!(stdout.contains("cpu: 150m      # +50.0%"));
    assert!(stdout.contains("memory: 100Mi  # -50.0%"));
    assert!(!stdout.contains("not set"), "Fixture has no missing values");
}

#[test]
fn test_breakdown_json() {
    let file = fixture();
    let output = ros(&[
        "breakdown",
        file.to_str().unwrap(),
        "--format",
        "json",
        "--engine",
        "performance",
    ]);
    assert!(output.status.success(), "Breakdown JSON should succeed");

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(json["engine"], "performance");
    assert_eq!(json["recommended"]["has_missing"], true);
    assert_eq!(json["recommended"]["warnings"]["requests"]["memory"], true);
    assert_eq!(json["variations"]["requests"]["cpu"]["text"], "+900.0%");
}

#[test]
fn test_breakdown_without_recommendation() {
    let file = fixture();
    let output = ros(&[
        "breakdown",
        file.to_str().unwrap(),
        "--id",
        "9d4e7b21-0c3a-4f6e-8b2d-5a1f3c9e7d04",
    ]);
    let stdout = stdout(&output);

    assert!(output.status.success(), "Missing recommendation is not an error");
    assert!(stdout.contains("No cost recommendation available for short_term"));
    assert!(stdout.contains("Some resource values are not set"));
}

#[test]
fn test_breakdown_unknown_id() {
    let file = fixture();
    let output = ros(&["breakdown", file.to_str().unwrap(), "--id", "missing"]);

    assert!(!output.status.success(), "Unknown ID should fail");
    assert!(String::from_utf8_lossy(&output.stderr).contains("No recommendation with ID missing"));
}

#[test]
fn test_invalid_interval() {
    let file = fixture();
    let output = ros(&["breakdown", file.to_str().unwrap(), "--interval", "yearly"]);

    assert!(!output.status.success(), "Invalid interval should fail");
}

#[test]
fn test_variations_table() {
    let file = fixture();
    let output = ros(&["variations", file.to_str().unwrap()]);
    let stdout = stdout(&output);

    assert!(output.status.success(), "Variations should succeed");
    assert!(stdout.contains("limits.cpu"));
    assert!(stdout.contains("requests.memory"));
    assert!(stdout.contains("+50.0%"));
    assert!(stdout.contains("-50.0%"));
}

#[test]
fn test_variations_percent_precision_from_env() {
    let file = fixture();
    let config_dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_ros"))
        .args(["variations", file.to_str().unwrap(), "--format", "json"])
        .env("ROS_CONFIG", config_dir.path().join("config.json"))
        .env("ROS_BREAKDOWN_PERCENT_PRECISION", "2")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "Variations JSON should succeed");

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().expect("Output should be an array");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2]["resource"], "requests.cpu");
    assert_eq!(rows[2]["change"], "+50.00%");
}

#[test]
fn test_list_table() {
    let file = fixture();
    let output = ros(&["list", file.to_str().unwrap()]);
    let stdout = stdout(&output);

    assert!(output.status.success(), "List should succeed");
    assert!(stdout.contains("api-server"));
    assert!(stdout.contains("prod-east"));
    assert!(stdout.contains("c7a9d3e1-2b4f-4e6a-9c8d-1f0e2d3c4b5a"));
    assert!(stdout.contains("days ago"), "Last reported should be relative");
    assert!(stdout.contains("Missing values"));
    assert!(stdout.contains("Total: 2 recommendations"));
}

#[test]
fn test_list_json_flags_missing_values() {
    let file = fixture();
    let output = ros(&["list", file.to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success(), "List JSON should succeed");

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().expect("Output should be an array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["has_missing"], false);
    assert_eq!(rows[0]["last_reported"], "2024-05-14T09:30:00Z");
    assert_eq!(rows[1]["has_missing"], true);
}

#[test]
fn test_variations_without_recommendation() {
    let file = fixture();
    let output = ros(&[
        "variations",
        file.to_str().unwrap(),
        "--id",
        "9d4e7b21-0c3a-4f6e-8b2d-5a1f3c9e7d04",
        "--interval",
        "long-term",
    ]);

    assert!(output.status.success(), "Missing recommendation is not an error");
    assert!(stdout(&output).contains("No cost recommendation available for long_term"));
}

#[test]
fn test_config_defaults_apply() {
    let file = fixture();
    let config_dir = tempfile::tempdir().unwrap();
    let config_path = config_dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{"default_engine": "performance", "default_format": "json"}"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ros"))
        .args(["breakdown", file.to_str().unwrap()])
        .env("ROS_CONFIG", &config_path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "Breakdown should succeed");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["engine"], "performance");
    assert_eq!(json["interval"], "short_term");
}
