//! Integration tests for all CLI commands
//!
//! Tests each command with real invocations.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ZEROS_AND_ONES: &str = concat!(
    " _  _  _  _  _  _  _  _  _ \n",
    "| || || || || || || || || |\n",
    "|_||_||_||_||_||_||_||_||_|\n",
    "\n",
    "                           \n",
    "  |  |  |  |  |  |  |  |  |\n",
    "  |  |  |  |  |  |  |  |  |\n",
    "\n",
);

/// Helper to create a CLI command
fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_policy-ocr"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write a document into the temp dir and return its path
fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ============ PARSE COMMAND TESTS ============

#[test]
fn test_parse_help() {
    cli()
        .arg("parse")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse a document"));
}

#[test]
fn test_parse_writes_results_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "policies.txt", ZEROS_AND_ONES);
    let output_dir = dir.path().join("out");

    cli()
        .arg("parse")
        .arg(&input)
        .arg("--output-dir")
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("111111111 ERR"));

    let written = fs::read_to_string(output_dir.join("policies_parsed.txt")).unwrap();
    assert_eq!(written, "000000000 \n111111111 ERR\n");
}

#[test]
fn test_parse_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    cli()
        .arg("parse")
        .arg(dir.path().join("nope.txt"))
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_parse_blank_file_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "blank.txt", "   \n\n  \n");

    cli()
        .arg("parse")
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("blank"));
}

#[test]
fn test_parse_json_report() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "policies.txt", ZEROS_AND_ONES);

    let output = cli()
        .arg("parse")
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["statistics"]["total"], 2);
    assert_eq!(report["statistics"]["checksum_error"], 1);
    assert_eq!(report["records"][1]["line"], "111111111 ERR");
}

#[test]
fn test_parse_reports_structural_errors() {
    let dir = TempDir::new().unwrap();
    let broken = ZEROS_AND_ONES.replacen("| || |", "| ||", 1);
    let input = write_input(dir.path(), "broken.txt", &broken);

    cli()
        .arg("parse")
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("????????? ILL"))
        .stdout(predicate::str::contains("Structural errors"));
}

#[test]
fn test_parse_log_file_replaces_stderr() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "policies.txt", ZEROS_AND_ONES);
    let log_path = dir.path().join("logs").join("parse.log");

    cli()
        .arg("parse")
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--log-file")
        .arg(&log_path)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("Parsed 2 policy numbers").not());

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Parsed 2 policy numbers"));
}

#[test]
fn test_parse_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "policies.txt", ZEROS_AND_ONES);
    let output_dir = dir.path().join("configured");
    let config = write_input(
        dir.path(),
        "config.toml",
        &format!("[output]\ndir = {:?}\n", output_dir.display().to_string()),
    );

    cli()
        .arg("parse")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(output_dir.join("policies_parsed.txt").exists());
}

// ============ GENERATE COMMAND TESTS ============

#[test]
fn test_generate_is_reproducible() {
    let first = cli()
        .args(["generate", "--seed", "42"])
        .output()
        .unwrap();
    let second = cli().args(["gen", "--seed", "42"]).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    // 30 groups of 3 glyph lines plus a blank line
    assert_eq!(String::from_utf8_lossy(&first.stdout).lines().count(), 120);
}

#[test]
fn test_generate_then_parse() {
    let dir = TempDir::new().unwrap();
    let sample = dir.path().join("sample.txt");

    cli()
        .args(["generate", "--valid", "5", "--correctable", "2", "--illegible", "0"])
        .args(["--checksum-errors", "3"])
        .args(["--unparseable", "1", "--seed", "7", "--output"])
        .arg(&sample)
        .assert()
        .success();

    let output = cli()
        .arg("parse")
        .arg(&sample)
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--json")
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["statistics"]["valid"], 7);
    assert_eq!(report["statistics"]["corrected"], 2);
    assert_eq!(report["statistics"]["checksum_error"], 3);
    assert_eq!(report["statistics"]["unparseable"], 1);
}

// ============ SHOW COMMAND TESTS ============

#[test]
fn test_show_prints_glyphs() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "policies.txt", ZEROS_AND_ONES);

    cli()
        .arg("show")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("|_||_||_||_||_||_||_||_||_|"))
        .stdout(predicate::str::contains("000000000"));
}
