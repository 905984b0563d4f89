//! Integration tests for ascheck CLI functionality

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_help_output() {
    let mut cmd = Command::cargo_bin("ascheck").expect("Failed to find ascheck binary");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Classify ASN values"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--ranges"));
}

#[test]
fn test_version_output() {
    let mut cmd = Command::cargo_bin("ascheck").expect("Failed to find ascheck binary");
    cmd.arg("--version");

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("ascheck "));
    // In debug builds, should contain -UNRELEASED
    if cfg!(debug_assertions) {
        assert!(stdout.contains("-UNRELEASED"));
    }
}

#[test]
fn test_plain_output() {
    let mut cmd = Command::cargo_bin("ascheck").expect("Failed to find ascheck binary");
    cmd.args(["65535", "13335", "402333"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bogon"))
        .stdout(predicate::str::contains("allocated"))
        .stdout(predicate::str::contains("unallocated"));
}

#[test]
fn test_as_prefix_accepted() {
    let mut cmd = Command::cargo_bin("ascheck").expect("Failed to find ascheck binary");
    cmd.arg("AS65535");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bogon"));
}

#[test]
fn test_json_output_format() {
    let mut cmd = Command::cargo_bin("ascheck").expect("Failed to find ascheck binary");
    cmd.args(["--json", "65535", "402333", "13335"]);

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Value = serde_json::from_str(&stdout).expect("Output should be valid JSON");

    let entries = parsed.as_array().expect("Output should be a JSON array");
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0]["asn"], 65535);
    assert_eq!(entries[0]["status"], "bogon");
    assert_eq!(entries[0]["bogon"], true);

    assert_eq!(entries[1]["asn"], 402333);
    assert_eq!(entries[1]["status"], "unallocated");
    assert_eq!(entries[1]["unallocated"], true);

    assert_eq!(entries[2]["asn"], 13335);
    assert_eq!(entries[2]["status"], "allocated");
    assert_eq!(entries[2]["bogon"], false);
    assert_eq!(entries[2]["unallocated"], false);
}

#[test]
fn test_ranges_file_override() {
    let path = std::env::temp_dir().join("ascheck_cli_ranges.json");
    std::fs::write(&path, r#"[{"start": 100000, "end": 200000}]"#).unwrap();

    let mut cmd = Command::cargo_bin("ascheck").expect("Failed to find ascheck binary");
    cmd.args(["--json", "--ranges"])
        .arg(&path)
        .args(["150000", "402333"]);

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    let entries = parsed.as_array().unwrap();

    // 150000 is inside the custom table; 402333 no longer is
    assert_eq!(entries[0]["status"], "unallocated");
    assert_eq!(entries[1]["status"], "allocated");

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_invalid_asn_fails() {
    let mut cmd = Command::cargo_bin("ascheck").expect("Failed to find ascheck binary");
    cmd.arg("not-an-asn");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid ASN"));
}

#[test]
fn test_missing_ranges_file_fails() {
    let mut cmd = Command::cargo_bin("ascheck").expect("Failed to find ascheck binary");
    cmd.args(["--ranges", "/nonexistent/ascheck_table.json", "65535"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_no_arguments_fails() {
    let mut cmd = Command::cargo_bin("ascheck").expect("Failed to find ascheck binary");

    cmd.assert().failure();
}
