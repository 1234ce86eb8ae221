//! Integration tests for the liftplan binary.
//!
//! These tests verify end-to-end behavior:
//! - Program generation from a profile file
//! - CSV and JSON export
//! - Configuration error reporting

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("liftplan"))
}

fn write_profile(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("profile.json");
    let profile = r#"{
        "name": "Test Client",
        "gender": "male",
        "age": 32,
        "weight_kg": 84.0,
        "height_cm": 181.0,
        "experience": "intermediate",
        "equipment": ["barbell", "dumbbell", "rack", "bench", "cable", "machine", "bodyweight", "pullup_bar"],
        "one_rm": {
            "squat": 140.0,
            "bench": 100.0,
            "deadlift": 170.0
        }
    }"#;
    fs::write(&path, profile).expect("Failed to write profile");
    path
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Training program generator"));
}

#[test]
fn test_catalog_validate() {
    cli()
        .args(["catalog", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog OK"));
}

#[test]
fn test_catalog_list_shows_exercises() {
    cli()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("back_squat"))
        .stdout(predicate::str::contains("kb_swing"));
}

#[test]
fn test_generate_strength_program() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(&temp_dir);

    cli()
        .args(["generate", "--profile"])
        .arg(&profile)
        .args(["--goal", "strength", "--weeks", "12", "--days", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 12"))
        .stdout(predicate::str::contains("Realization"))
        .stdout(predicate::str::contains("Back Squat"));
}

#[test]
fn test_generate_writes_csv() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(&temp_dir);
    let csv_path = temp_dir.path().join("plan.csv");

    cli()
        .args(["generate", "--profile"])
        .arg(&profile)
        .args(["--goal", "hypertrophy", "--weeks", "8", "--days", "4", "--csv"])
        .arg(&csv_path)
        .assert()
        .success();

    let content = fs::read_to_string(&csv_path).expect("CSV not written");
    assert!(content.starts_with("week,phase,deload"));
    // 8 weeks of 4 days with multiple exercises each
    assert!(content.lines().count() > 8 * 4);
}

#[test]
fn test_generate_writes_json() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(&temp_dir);
    let json_path = temp_dir.path().join("plan.json");

    cli()
        .args(["generate", "--profile"])
        .arg(&profile)
        .args(["--weeks", "8", "--days", "3", "--json"])
        .arg(&json_path)
        .assert()
        .success();

    let content = fs::read_to_string(&json_path).expect("JSON not written");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("invalid JSON");
    assert_eq!(parsed["total_weeks"], 8);
    assert_eq!(parsed["weeks"].as_array().unwrap().len(), 8);
}

#[test]
fn test_generate_rejects_short_event_program() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(&temp_dir);

    cli()
        .args(["generate", "--profile"])
        .arg(&profile)
        .args(["--goal", "event", "--weeks", "2", "--days", "3"])
        .assert()
        .failure();
}

#[test]
fn test_generate_rejects_unknown_goal() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(&temp_dir);

    cli()
        .args(["generate", "--profile"])
        .arg(&profile)
        .args(["--goal", "crossfit"])
        .assert()
        .failure();
}

#[test]
fn test_generate_with_model_override() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(&temp_dir);

    cli()
        .args(["generate", "--profile"])
        .arg(&profile)
        .args([
            "--goal",
            "strength",
            "--weeks",
            "12",
            "--days",
            "3",
            "--model",
            "wave",
            "--style",
            "linear",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linear periodization"));
}

#[test]
fn test_missing_profile_fails() {
    cli()
        .args(["generate", "--profile", "/nonexistent/profile.json"])
        .assert()
        .failure();
}
