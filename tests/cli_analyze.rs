// End-to-end analyze runs driven by the cache entry point, so they work
// without network access: a pre-tallied cache file stands in for the
// GitHub collector.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn reposcore() -> Command {
    Command::cargo_bin("reposcore").expect("binary should exist")
}

fn write_cache(output: &std::path::Path, repo_key: &str, participants: &str) {
    fs::create_dir_all(output).expect("output dir should create");
    fs::write(
        output.join(format!("cache_{repo_key}.json")),
        format!(
            r#"{{
  "update_time": "2026-03-02T12:00:00Z",
  "participants": {participants}
}}"#
        ),
    )
    .expect("cache file should write");
}

const PARTICIPANTS: &str = r#"{
    "alice": {"feat_bug_prs": 2, "doc_prs": 5, "feat_bug_issues": 3, "doc_issues": 1},
    "bob": {"feat_bug_prs": 1, "doc_prs": 0, "feat_bug_issues": 0, "doc_issues": 0},
    "carol": {"feat_bug_prs": 0, "doc_prs": 10, "feat_bug_issues": 5, "doc_issues": 5}
}"#;

#[test]
fn analyze_from_cache_writes_all_result_files() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = dir.path().join("results");
    write_cache(&output, "course_repo", PARTICIPANTS);

    reposcore()
        .args(["analyze", "course/repo", "--use-cache", "--min-score", "0"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let repo_dir = output.join("course_repo");
    let csv = fs::read_to_string(repo_dir.join("score.csv")).expect("csv should exist");
    let lines: Vec<&str> = csv.lines().collect();
    // alice 23, bob 3, carol 0 (doc-only work earns nothing).
    assert_eq!(lines[1], "alice,6,10,6,1,23,88.5");
    assert_eq!(lines[2], "bob,3,0,0,0,3,11.5");
    assert_eq!(lines[3], "carol,0,0,0,0,0,0.0");

    let text = fs::read_to_string(repo_dir.join("score.txt")).expect("text should exist");
    assert!(text.lines().any(|line| line.starts_with("avg")));

    let chart = fs::read_to_string(repo_dir.join("chart.txt")).expect("chart should exist");
    assert!(chart.contains("Total participants: 3"));
}

#[test]
fn min_score_default_hides_zero_scorers() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = dir.path().join("results");
    write_cache(&output, "course_repo", PARTICIPANTS);

    reposcore()
        .args(["analyze", "course/repo", "--use-cache", "--format", "table"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let csv = fs::read_to_string(output.join("course_repo").join("score.csv"))
        .expect("csv should exist");
    assert!(csv.contains("alice"));
    assert!(!csv.contains("carol"));
    assert!(!output.join("course_repo").join("score.txt").exists());
}

#[test]
fn user_flag_prints_score_and_rank() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = dir.path().join("results");
    write_cache(&output, "course_repo", PARTICIPANTS);

    reposcore()
        .args(["analyze", "course/repo", "--use-cache", "--user", "alice"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("user: alice"))
        .stdout(predicate::str::contains("score: 23"))
        .stdout(predicate::str::contains("rank: 1 of 3"));
}

#[test]
fn user_flag_synthesizes_zero_for_missing_participant() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = dir.path().join("results");
    write_cache(&output, "course_repo", PARTICIPANTS);

    reposcore()
        .args(["analyze", "course/repo", "--use-cache", "--user", "mallory"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("score: 0 (no recorded contributions)"));
}

#[test]
fn user_info_renames_participants_in_reports() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = dir.path().join("results");
    write_cache(&output, "course_repo", PARTICIPANTS);
    let user_info = dir.path().join("user_info.json");
    fs::write(&user_info, r#"{"alice": "Alice Park"}"#).expect("user info should write");

    reposcore()
        .args(["analyze", "course/repo", "--use-cache", "--format", "table"])
        .arg("--output")
        .arg(&output)
        .arg("--user-info")
        .arg(&user_info)
        .assert()
        .success();

    let csv = fs::read_to_string(output.join("course_repo").join("score.csv"))
        .expect("csv should exist");
    assert!(csv.contains("Alice Park"));
    assert!(!csv.contains("alice,"));
}

#[test]
fn multiple_repositories_produce_a_combined_scoreboard() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = dir.path().join("results");
    write_cache(
        &output,
        "course_first",
        r#"{"alice": {"feat_bug_prs": 1, "doc_prs": 0, "feat_bug_issues": 0, "doc_issues": 0}}"#,
    );
    write_cache(
        &output,
        "course_second",
        r#"{"alice": {"feat_bug_prs": 1, "doc_prs": 2, "feat_bug_issues": 0, "doc_issues": 0}}"#,
    );

    reposcore()
        .args([
            "analyze",
            "course/first,course/second",
            "--use-cache",
            "--format",
            "table",
        ])
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let csv = fs::read_to_string(output.join("overall").join("score.csv"))
        .expect("combined csv should exist");
    // Merged tallies: 2 feat/bug PRs and 2 doc PRs -> 6 + 4 points.
    assert!(csv.contains("alice,6,4,0,0,10,100.0"));
}

#[test]
fn empty_participant_set_completes_with_warning_exit() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = dir.path().join("results");
    write_cache(&output, "course_repo", "{}");

    reposcore()
        .args(["analyze", "course/repo", "--use-cache"])
        .arg("--output")
        .arg(&output)
        .assert()
        .code(1);

    // Result files are still produced, just with no participant rows.
    let csv = fs::read_to_string(output.join("course_repo").join("score.csv"))
        .expect("csv should exist");
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn corrupt_cache_fails_with_runtime_error() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = dir.path().join("results");
    fs::create_dir_all(&output).expect("output dir should create");
    fs::write(output.join("cache_course_repo.json"), "{broken")
        .expect("cache file should write");

    reposcore()
        .args(["analyze", "course/repo", "--use-cache"])
        .arg("--output")
        .arg(&output)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cache file error"));
}
