//! Integration tests for the `slotwise` CLI binary.
//!
//! Exercises the slots, validate, and sample-config subcommands through
//! the actual binary, including fixture files, JSON output parsing, and
//! failure reporting on stderr.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Helper: path to a fixture file.
fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn slotwise() -> Command {
    Command::cargo_bin("slotwise").unwrap()
}

/// Helper: run `slots` over the standard fixture week and parse stdout.
fn run_slots(args: &[&str]) -> Value {
    let output = slotwise().args(args).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&stdout).expect("slots output must be JSON")
}

fn slot_starts(body: &Value) -> Vec<&str> {
    body["available_slots"]
        .as_array()
        .expect("available_slots must be an array")
        .iter()
        .map(|slot| slot["start_time"].as_str().unwrap())
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// slots subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn slots_for_a_single_day_with_lunch_break() {
    let body = run_slots(&[
        "slots",
        "--config",
        &fixture("config.json"),
        "--start",
        "2026-03-02",
        "--end",
        "2026-03-02",
        "--timezone",
        "UTC",
    ]);

    assert_eq!(
        slot_starts(&body),
        vec![
            "2026-03-02T09:00:00+00:00",
            "2026-03-02T10:00:00+00:00",
            "2026-03-02T11:00:00+00:00",
            "2026-03-02T13:00:00+00:00",
            "2026-03-02T14:00:00+00:00",
            "2026-03-02T15:00:00+00:00",
            "2026-03-02T16:00:00+00:00",
        ]
    );
}

#[test]
fn slots_with_busy_file_drop_overlapping_candidates() {
    // busy.json blocks 14:30-15:30 on the Monday, which eats the 14:00
    // and 15:00 slots.
    let body = run_slots(&[
        "slots",
        "--config",
        &fixture("config.json"),
        "--busy",
        &fixture("busy.json"),
        "--start",
        "2026-03-02",
        "--end",
        "2026-03-02",
        "--timezone",
        "UTC",
    ]);

    let starts = slot_starts(&body);
    assert_eq!(starts.len(), 5);
    assert!(!starts.contains(&"2026-03-02T14:00:00+00:00"));
    assert!(!starts.contains(&"2026-03-02T15:00:00+00:00"));
    assert!(starts.contains(&"2026-03-02T16:00:00+00:00"));
}

#[test]
fn slots_render_the_query_timezone_offset() {
    let body = run_slots(&[
        "slots",
        "--config",
        &fixture("config.json"),
        "--start",
        "2026-03-02",
        "--end",
        "2026-03-02",
        "--timezone",
        "America/New_York",
    ]);

    let starts = slot_starts(&body);
    assert_eq!(starts.first(), Some(&"2026-03-02T09:00:00-05:00"));
}

#[test]
fn weekend_day_yields_an_empty_slot_list() {
    // 2026-03-01 is a Sunday and the fixture has no weekend rules.
    let body = run_slots(&[
        "slots",
        "--config",
        &fixture("config.json"),
        "--start",
        "2026-03-01",
        "--end",
        "2026-03-01",
        "--timezone",
        "UTC",
    ]);

    assert!(body["available_slots"].as_array().unwrap().is_empty());
}

#[test]
fn missing_config_file_reports_configuration_missing() {
    slotwise()
        .args([
            "slots",
            "--config",
            &fixture("does_not_exist.json"),
            "--start",
            "2026-03-02",
            "--end",
            "2026-03-02",
            "--timezone",
            "UTC",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
}

#[test]
fn unknown_timezone_is_reported() {
    slotwise()
        .args([
            "slots",
            "--config",
            &fixture("config.json"),
            "--start",
            "2026-03-02",
            "--end",
            "2026-03-02",
            "--timezone",
            "Mars/Olympus_Mons",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn inverted_date_range_is_reported() {
    slotwise()
        .args([
            "slots",
            "--config",
            &fixture("config.json"),
            "--start",
            "2026-03-06",
            "--end",
            "2026-03-02",
            "--timezone",
            "UTC",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));
}

// ─────────────────────────────────────────────────────────────────────────────
// validate subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn validate_accepts_the_fixture_config() {
    slotwise()
        .args(["validate", "--config", &fixture("config.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"))
        .stdout(predicate::str::contains("5 available weekday(s)"));
}

#[test]
fn validate_rejects_duplicate_weekday_rules() {
    slotwise()
        .args(["validate", "--config", &fixture("duplicate_day.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate rule for day_of_week 2"));
}

// ─────────────────────────────────────────────────────────────────────────────
// sample-config subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn sample_config_emits_a_valid_document() {
    let output = slotwise().arg("sample-config").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    // The emitted document must itself pass validation and drive the
    // slots subcommand.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, &stdout).unwrap();

    slotwise()
        .args(["validate", "--config", path.to_str().unwrap()])
        .assert()
        .success();

    let body = run_slots(&[
        "slots",
        "--config",
        path.to_str().unwrap(),
        "--start",
        "2026-03-02",
        "--end",
        "2026-03-02",
        "--timezone",
        "UTC",
    ]);
    assert_eq!(slot_starts(&body).len(), 7);
}
