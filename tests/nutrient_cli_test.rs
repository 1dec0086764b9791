// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Integration tests for the nutrient-cli binary
// ABOUTME: Tests calculate, batch and config commands, output formats and exit codes

//! Integration tests for the nutrient-cli binary.
//!
//! These tests run the compiled binary with a cleared environment and check
//! exit codes, stdout and stderr.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

mod common;

const REFERENCE_ARGS: [&str; 15] = [
    "calculate",
    "--sex",
    "MALE",
    "--weight",
    "100",
    "--body-fat",
    "25",
    "--activity",
    "1",
    "--age",
    "23",
    "--stress",
    "5",
    "--goal",
    "MuscleGain",
];

/// Command for the nutrient-cli binary with an empty environment
fn cli_command() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_nutrient-cli"));
    command.env_clear();
    command
}

fn capture(output: &Output) -> (i32, String, String) {
    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (exit_code, stdout, stderr)
}

/// Helper to run CLI command with extra environment variables and capture output
fn run_cli_with_env(args: &[&str], envs: &[(&str, &str)]) -> (i32, String, String) {
    let output = cli_command()
        .args(args)
        .envs(envs.iter().copied())
        .output()
        .unwrap();
    capture(&output)
}

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    run_cli_with_env(args, &[])
}

fn with_format<'a>(args: &[&'a str], format: &'a str) -> Vec<&'a str> {
    let mut all = args.to_vec();
    all.extend(["--format", format]);
    all
}

fn parse_tuple(line: &str) -> Vec<f64> {
    line.trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .split(", ")
        .map(|value| value.parse().unwrap())
        .collect()
}

// ============================================================================
// CALCULATE
// ============================================================================

#[test]
fn test_calculate_tuple_prints_reference_values() {
    let (exit_code, stdout, stderr) = run_cli(&with_format(&REFERENCE_ARGS, "tuple"));

    assert_eq!(exit_code, 0, "calculate should succeed: {stderr}");
    let values = parse_tuple(&stdout);
    assert_eq!(values.len(), 5);
    common::assert_close(values[0], 72.5, "clean weight");
    common::assert_close(values[1], 3093.2125, "calories");
    common::assert_close(values[2], 108.75, "protein");
    common::assert_close(values[3], 72.5, "fat");
    common::assert_close(values[4], 501.428_125, "carbs");
}

#[test]
fn test_calculate_json_output_parses() {
    let (exit_code, stdout, _stderr) = run_cli(&with_format(&REFERENCE_ARGS, "json"));

    assert_eq!(exit_code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    common::assert_close(json["clean_weight"].as_f64().unwrap(), 72.5, "clean weight");
    assert!(json["carbs_g"].is_number());
}

#[test]
fn test_calculate_text_is_default_format() {
    let (exit_code, stdout, _stderr) = run_cli(&REFERENCE_ARGS);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Clean weight:"));
    assert!(stdout.contains("kcal"));
}

#[test]
fn test_calculate_rejects_lowercase_sex() {
    let mut args = REFERENCE_ARGS.to_vec();
    args[2] = "male";

    let (exit_code, stdout, stderr) = run_cli(&args);

    assert_ne!(exit_code, 0, "lowercase sex tag must be rejected");
    assert!(stdout.is_empty());
    assert!(stderr.contains("male"), "stderr should name the bad value: {stderr}");
}

#[test]
fn test_calculate_negative_weight_reports_json_error() {
    let mut args = REFERENCE_ARGS.to_vec();
    args[4] = "-1";

    let (exit_code, stdout, stderr) = run_cli(&with_format(&args, "json"));

    assert_eq!(exit_code, 65);
    assert!(stdout.is_empty());
    let json: serde_json::Value = serde_json::from_str(&stderr).unwrap();
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
}

#[test]
fn test_calculate_with_invalid_environment_exits_with_config_status() {
    let (exit_code, stdout, stderr) = run_cli_with_env(
        &with_format(&REFERENCE_ARGS, "tuple"),
        &[("NUTRITION_SENIOR_FACTOR", "abc")],
    );

    assert_eq!(exit_code, 78);
    assert!(stdout.is_empty());
    assert!(stderr.contains("NUTRITION_SENIOR_FACTOR"));
}

// ============================================================================
// BATCH
// ============================================================================

#[test]
fn test_batch_reports_each_profile_in_order() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"[
            {"sex": "MALE", "total_weight": 100.0, "body_fat_pct": 25, "activity_score": 1,
             "age": 23, "stress_level": 5, "goal": "MuscleGain"},
            {"sex": "FEMALE", "total_weight": 0.0, "body_fat_pct": 20, "activity_score": 2,
             "age": 40, "stress_level": 1, "goal": "Maintain"}
        ]"#,
    )
    .unwrap();
    file.flush().unwrap();
    let path = file.path().to_str().unwrap();

    let (exit_code, stdout, stderr) = run_cli(&["batch", path, "--format", "tuple"]);
    assert_eq!(exit_code, 0, "batch should succeed: {stderr}");
    let lines: Vec<&str> = stdout.lines().collect();
    common::assert_close(parse_tuple(lines[0])[1], 3093.2125, "first calories");
    assert!(lines[1].starts_with("[1] error:"));

    let (exit_code, stdout, _stderr) = run_cli(&["batch", path, "--format", "json"]);
    assert_eq!(exit_code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json[0]["index"], 0);
    assert_eq!(json[1]["error"]["code"], "INVALID_INPUT");
}

#[test]
fn test_batch_missing_file_exits_with_no_input_status() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let (exit_code, stdout, stderr) = run_cli(&["batch", missing.to_str().unwrap()]);

    assert_eq!(exit_code, 66);
    assert!(stdout.is_empty());
    assert!(stderr.contains("could not be read"));
}

// ============================================================================
// CONFIG
// ============================================================================

#[test]
fn test_config_show_prints_effective_configuration() {
    let (exit_code, stdout, stderr) = run_cli(&["config", "show"]);

    assert_eq!(exit_code, 0, "config show should succeed: {stderr}");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["nutrition"]["calories"]["base_kcal_per_kg"], 27.0);
    assert_eq!(json["environment_overrides"], serde_json::json!([]));
}

#[test]
fn test_config_show_lists_overrides() {
    let (exit_code, stdout, _stderr) =
        run_cli_with_env(&["config", "show"], &[("NUTRITION_BASE_KCAL_PER_KG", "30")]);

    assert_eq!(exit_code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["nutrition"]["calories"]["base_kcal_per_kg"], 30.0);
    assert_eq!(
        json["environment_overrides"],
        serde_json::json!(["NUTRITION_BASE_KCAL_PER_KG"])
    );
}

#[cfg(unix)]
#[test]
fn test_config_show_tolerates_non_utf8_environment() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = cli_command()
        .args(["config", "show"])
        .env("UNRELATED_BINARY_VALUE", OsStr::from_bytes(&[0xff]))
        .env(OsStr::from_bytes(&[0xfe, 0xff]), "x")
        .output()
        .unwrap();
    let (exit_code, stdout, stderr) = capture(&output);

    assert_eq!(exit_code, 0, "config show should succeed: {stderr}");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["environment_overrides"], serde_json::json!([]));
}

#[test]
fn test_help_lists_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("calculate"));
    assert!(stdout.contains("batch"));
    assert!(stdout.contains("config"));
}
