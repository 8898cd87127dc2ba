//! Integration tests for the flightdeck CLI
//!
//! Each test runs the real binary against a recorded session written to a
//! temporary directory and checks output and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const SESSION: &[&str] = &[
    r#"{ "timestamp":"2018-03-25T00:39:48Z", "event":"Status", "Flags":16842765, "Pips":[5,2,5], "FireGroup":0, "GuiFocus":0 }"#,
    r#"{ "timestamp":"2018-03-25T00:39:50Z", "event":"Music", "MusicTrack":"Exploration" }"#,
    r#"{ "timestamp":"2018-03-25T00:39:52Z", "event":"Status", "Flags":16842764, "Pips":[5,2,5], "FireGroup":0, "GuiFocus":0 }"#,
    r#"{ "timestamp":"2018-03-25T00:39:53Z", "event":"Status", "Fla"#,
    r#"{ "timestamp":"2018-03-25T00:40:10Z", "event":"Status", "Flags":16842760, "Pips":[8,4,0], "FireGroup":0, "GuiFocus":0 }"#,
];

/// Custom predicate to check if output is valid JSON
fn is_json() -> impl predicates::Predicate<[u8]> {
    predicates::function::function(|s: &[u8]| {
        std::str::from_utf8(s)
            .map(|text| serde_json::from_str::<Value>(text).is_ok())
            .unwrap_or(false)
    })
}

/// Test helper to create a flightdeck command with colours off
fn flightdeck() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("flightdeck")?;
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    Ok(cmd)
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> Result<PathBuf, std::io::Error> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

fn write_session(dir: &TempDir) -> Result<PathBuf, std::io::Error> {
    write_file(dir, "Status.jsonl", &SESSION.join("\n"))
}

#[test]
fn test_cli_help() -> TestResult {
    flightdeck()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status.json"));
    Ok(())
}

#[test]
fn test_cli_version() -> TestResult {
    flightdeck()?
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flightdeck"));
    Ok(())
}

#[test]
fn test_decode_human() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_session(&dir)?;

    flightdeck()?
        .arg("decode")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Vehicle: Ship   FSD: masslock"))
        .stdout(predicate::str::contains("Pips: SYS 2.5 ENG 1 WEA 2.5"))
        .stdout(predicate::str::contains("Skipped line 4"));
    Ok(())
}

#[test]
fn test_decode_json() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_session(&dir)?;

    let output = flightdeck()?
        .arg("--json")
        .arg("decode")
        .arg(&path)
        .assert()
        .success()
        .stdout(is_json())
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output)?;
    assert_eq!(value["success"], true);
    let statuses = value["statuses"].as_array().ok_or("statuses not an array")?;
    assert_eq!(statuses.len(), 3);
    assert_eq!(statuses[0]["line"], 1);
    assert_eq!(statuses[0]["status"]["vehicle"], "Ship");
    assert_eq!(statuses[0]["status"]["docked"], true);
    assert_eq!(statuses[0]["status"]["fsd_status"], "masslock");
    assert_eq!(statuses[0]["status"]["gui_focus"], "none");
    assert_eq!(value["ignored"], 1);
    assert_eq!(value["skipped"][0]["line"], 4);
    Ok(())
}

#[test]
fn test_decode_last() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_session(&dir)?;

    let output = flightdeck()?
        .args(["decode", "--last", "--json"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output)?;
    let statuses = value["statuses"].as_array().ok_or("statuses not an array")?;
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0]["line"], 5);
    Ok(())
}

#[test]
fn test_decode_stdin() -> TestResult {
    flightdeck()?
        .args(["decode", "-"])
        .write_stdin(SESSION.join("\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Status 2018-03-25 00:39:48 UTC"));
    Ok(())
}

#[test]
fn test_decode_missing_file() -> TestResult {
    flightdeck()?
        .args(["decode", "/nonexistent/Status.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Input not found"));
    Ok(())
}

#[test]
fn test_decode_missing_file_json_error() -> TestResult {
    let output = flightdeck()?
        .args(["--json", "decode", "/nonexistent/Status.json"])
        .assert()
        .code(2)
        .stdout(is_json())
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output)?;
    assert_eq!(value["success"], false);
    assert_eq!(value["error"]["type"], "input_not_found");
    Ok(())
}

#[test]
fn test_decode_only_malformed() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_file(&dir, "broken.jsonl", "{ not json\n[1,2]\n")?;

    flightdeck()?
        .arg("decode")
        .arg(&path)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Malformed input"));
    Ok(())
}

#[test]
fn test_replay_human() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_session(&dir)?;

    flightdeck()?
        .arg("replay")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("00:39:52 docked: true -> false"))
        .stdout(predicate::str::contains("00:40:10 landing_gear_down: true -> false"))
        .stdout(predicate::str::contains(
            "Replayed 5 lines: 3 decoded, 1 ignored, 1 skipped, 5 transitions",
        ));
    Ok(())
}

#[test]
fn test_replay_json() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_session(&dir)?;

    let output = flightdeck()?
        .args(["replay", "--json"])
        .arg(&path)
        .assert()
        .success()
        .stdout(is_json())
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output)?;
    let fields: Vec<&str> = value["transitions"]
        .as_array()
        .ok_or("transitions not an array")?
        .iter()
        .filter_map(|t| t["field"].as_str())
        .collect();
    assert_eq!(
        fields,
        vec!["docked", "landing_gear_down", "pips_sys", "pips_eng", "pips_wea"]
    );
    assert_eq!(value["stats"]["published"], 5);
    assert_eq!(value["stats"]["skipped"], 1);
    Ok(())
}

#[test]
fn test_replay_with_config() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_session(&dir)?;
    let config = write_file(
        &dir,
        "monitor.yaml",
        "name: test\nignored_fields:\n  - pips_sys\n  - pips_wea\n",
    )?;

    flightdeck()?
        .arg("replay")
        .arg(&path)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("pips_sys").not())
        .stdout(predicate::str::contains("00:40:10 pips_eng: 1 -> 2"))
        .stdout(predicate::str::contains("3 transitions"));
    Ok(())
}

#[test]
fn test_replay_invalid_config() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_session(&dir)?;
    let config = write_file(&dir, "monitor.yaml", "ignored_fields: [warp_drive]\n")?;

    flightdeck()?
        .arg("replay")
        .arg(&path)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("warp_drive"));
    Ok(())
}

#[test]
fn test_fields() -> TestResult {
    flightdeck()?
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("landing_gear_down\ndocked\n"));
    Ok(())
}
