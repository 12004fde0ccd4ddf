/// Integration tests for the map, lookup and source commands
use predicates::prelude::*;

use super::common::{cmd, fixture, stdout_json, TestContext};

#[test]
fn test_map_text_output() {
    cmd().args(["map", &fixture("add_kernel")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Source file: tests/fixtures/ttir/add_kernel.py",
        ))
        .stdout(predicate::str::contains("IR → source:"))
        .stdout(predicate::str::contains("Source → IR:"))
        .stdout(predicate::str::contains("-> 19, 20, 21, 22"));
}

#[test]
fn test_map_forward_only() {
    cmd().args(["map", &fixture("add_kernel"), "--forward-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IR → source:"))
        .stdout(predicate::str::contains("Source → IR:").not());
}

#[test]
fn test_map_json_output() {
    let output = cmd()
        .args(["map", &fixture("add_kernel"), "--format", "json"])
        .output()
        .expect("Failed to run map");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "ok");
    let result = &json["result"];
    assert_eq!(
        result["source_file_path"],
        "tests/fixtures/ttir/add_kernel.py"
    );
    assert_eq!(result["forward"]["5"], serde_json::json!([16]));
    assert_eq!(result["backward"]["18"], serde_json::json!([7, 8, 9]));
    assert_eq!(result["stats"]["unresolved"], 1);
}

#[test]
fn test_map_without_references_warns() {
    let ctx = TestContext::default();
    let ir = ctx.create_file("empty.ttir", "module {\n}\n").unwrap();

    cmd().args(["map", ir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No source file found in the IR file."))
        .stdout(predicate::str::contains("No location references resolved."));
}

#[test]
fn test_lookup_ir_line() {
    cmd().args(["lookup", &fixture("add_kernel"), "--ir-line", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("18"));
}

#[test]
fn test_lookup_source_line_json() {
    let output = cmd()
        .args([
            "lookup",
            &fixture("add_kernel"),
            "--source-line",
            "23",
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to run lookup");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["result"]["direction"], "backward");
    assert_eq!(json["result"]["matches"], serde_json::json!([19, 20, 21, 22]));
}

#[test]
fn test_lookup_unmapped_line() {
    cmd().args(["lookup", &fixture("add_kernel"), "--ir-line", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No mapping found for IR line 1"));
}

#[test]
fn test_source_command_prints_path() {
    cmd().args(["source", &fixture("add_kernel")])
        .assert()
        .success()
        .stdout(predicate::str::diff("tests/fixtures/ttir/add_kernel.py\n"));
}

#[test]
fn test_quiet_map_prints_only_entries() {
    cmd().args(["--quiet", "map", &fixture("add_kernel")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source file:").not())
        .stdout(predicate::str::contains("-> 16"));
}

#[test]
fn test_config_file_sets_json_format() {
    let ctx = TestContext::default();
    let config = ctx
        .create_file("ttir-sync.toml", "[output]\nformat = \"json\"\n")
        .unwrap();

    let output = cmd()
        .args([
            "--config",
            config.to_str().unwrap(),
            "source",
            &fixture("add_kernel"),
        ])
        .output()
        .expect("Failed to run source");
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["result"]["source_file_path"],
        "tests/fixtures/ttir/add_kernel.py"
    );
}
