/// Integration tests for CLI help and version commands
use predicates::prelude::*;

use super::common::cmd;

#[test]
fn test_help_flag() {
    cmd().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ttir-sync"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_help_lists_subcommands() {
    cmd().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("map"))
        .stdout(predicate::str::contains("lookup"))
        .stdout(predicate::str::contains("source"))
        .stdout(predicate::str::contains("interactive"));
}

#[test]
fn test_version_flag() {
    cmd().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_generate_script() {
    cmd().args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ttir-sync"));
}

#[test]
fn test_verbose_logs_build_metadata() {
    cmd().args(["--verbose", "source", "tests/fixtures/ttir/add_kernel.ttir"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting ttir-sync"))
        .stderr(predicate::str::contains("profile"));
}
