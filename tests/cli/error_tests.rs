/// Integration tests for CLI error handling
use predicates::prelude::*;

use super::common::{cmd, fixture, TestContext};

#[test]
fn test_map_with_missing_ir_file() {
    cmd().args(["map", "/nonexistent/kernel.ttir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read IR artifact"));
}

#[test]
fn test_source_without_bare_anchor_fails() {
    cmd().args(["source", &fixture("no_anchor")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No source file found"));
}

#[test]
fn test_source_without_bare_anchor_json_envelope() {
    let output = cmd()
        .args(["source", &fixture("no_anchor"), "--format", "json"])
        .output()
        .expect("Failed to run source");
    assert!(!output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    assert_eq!(json["status"], "error");
    assert!(json["errors"][0]
        .as_str()
        .unwrap()
        .contains("No source file found"));
}

#[test]
fn test_lookup_requires_a_direction() {
    cmd().args(["lookup", &fixture("add_kernel")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_lookup_rejects_both_directions() {
    cmd().args([
        "lookup",
        &fixture("add_kernel"),
        "--ir-line",
        "3",
        "--source-line",
        "3",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_lookup_rejects_line_zero() {
    cmd().args(["lookup", &fixture("add_kernel"), "--ir-line", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid line number"));
}

#[test]
fn test_invalid_format_value() {
    cmd().args(["map", &fixture("add_kernel"), "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_malformed_config_warns_and_uses_defaults() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let config = ctx
        .create_file("bad.toml", "[sync\ncontext_lines = ")
        .expect("Failed to write config");

    cmd().arg("--config")
        .arg(&config)
        .args(["source", &fixture("add_kernel")])
        .assert()
        .success()
        .stdout(predicate::str::contains("tests/fixtures/ttir/add_kernel.py"))
        .stderr(predicate::str::contains("Failed to load config"));
}
