// Integration tests for the reposcore CLI.
//
// These tests use assert_cmd to invoke the binary and verify exit codes
// and stdout/stderr output. Nothing here touches the network.

use assert_cmd::Command;
use predicates::prelude::*;

fn reposcore() -> Command {
    Command::cargo_bin("reposcore").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    reposcore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reposcore"));
}

#[test]
fn cli_help_flag() {
    reposcore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contribution scoring"));
}

#[test]
fn analyze_requires_repository() {
    reposcore()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn analyze_rejects_malformed_repository() {
    reposcore()
        .args(["analyze", "not-a-repo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid repository format"));
}

#[test]
fn analyze_rejects_unknown_format() {
    reposcore()
        .args(["analyze", "owner/repo", "--format", "png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    reposcore()
        .args(["analyze", "owner/repo", "--quiet", "--verbose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
