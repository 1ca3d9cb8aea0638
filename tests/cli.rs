// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::path::Path;
use tempfile::TempDir;

const CLEAN_SNAPSHOT: &str = r#"{
  "pr": {
    "title": "feat(api): add search endpoint [ABC-1234]",
    "body": "Adds a search endpoint to the public API.",
    "additions": 120,
    "deletions": 8
  },
  "commits": [
    "feat(api): add search endpoint",
    {"message": "test(api): cover search endpoint"},
    {"commit": {"message": "docs: document search"}}
  ],
  "modifiedFiles": ["src/api.rs", "tests/api.rs", "README.md"]
}"#;

const FAILING_SNAPSHOT: &str = r#"{
  "pr": { "title": "Update stuff", "body": "" },
  "commits": ["Update stuff"],
  "modified_files": ["src/lib.rs"]
}"#;

const WARNING_SNAPSHOT: &str = r#"{
  "pr": { "title": "feat(api): add search endpoint", "body": "Adds a search endpoint." },
  "commits": ["feat(api): add search endpoint"]
}"#;

/// A temp dir holding an empty config file so that discovery stops there.
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("kirinus.toml"), "").unwrap();
    dir
}

fn write_snapshot(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("snapshot.json");
    std::fs::write(&path, content).unwrap();
    path
}

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kirinus").unwrap();
    cmd.current_dir(dir).env_remove("KIRINUS_CONFIG");
    cmd
}

#[test]
fn check_clean_snapshot_passes() {
    let dir = workspace();
    let snapshot = write_snapshot(dir.path(), CLEAN_SNAPSHOT);

    cmd(dir.path())
        .arg("check")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(contains("## Changes"))
        .stdout(contains(":zap: Features"))
        .stdout(contains("All checks passed"));
}

#[test]
fn check_failing_snapshot_exits_with_error() {
    let dir = workspace();
    let snapshot = write_snapshot(dir.path(), FAILING_SNAPSHOT);

    cmd(dir.path())
        .arg("check")
        .arg(&snapshot)
        .assert()
        .failure()
        .code(1)
        .stdout(contains("PR needs a proper description"))
        .stderr(contains("failure(s)"));
}

#[test]
fn check_reads_stdin() {
    let dir = workspace();

    cmd(dir.path())
        .args(["check", "-"])
        .write_stdin(CLEAN_SNAPSHOT)
        .assert()
        .success();
}

#[test]
fn check_json_output() {
    let dir = workspace();
    let snapshot = write_snapshot(dir.path(), FAILING_SNAPSHOT);

    let output = cmd(dir.path())
        .args(["--format", "json", "check"])
        .arg(&snapshot)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["markdowns"].as_array().unwrap().len(), 1);
    assert!(!report["fails"].as_array().unwrap().is_empty());
    assert!(report["warnings"].is_array());
    assert!(report["messages"].is_array());
}

#[test]
fn check_warnings_pass_unless_strict() {
    let dir = workspace();
    let snapshot = write_snapshot(dir.path(), WARNING_SNAPSHOT);

    cmd(dir.path())
        .arg("check")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(contains("JIRA issue"));

    cmd(dir.path())
        .arg("check")
        .arg(&snapshot)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("0 failure(s) and 1 warning(s) reported"));
}

#[test]
fn check_respects_config_file() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("kirinus.toml"),
        "[pr_lint]\nseverity = \"disable\"\n\n[conventional]\nseverity = \"warn\"\n",
    )
    .unwrap();
    let snapshot = write_snapshot(dir.path(), FAILING_SNAPSHOT);

    cmd(dir.path())
        .arg("check")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(contains("PR needs a proper description").not());
}

#[test]
fn check_missing_snapshot() {
    let dir = workspace();

    cmd(dir.path())
        .args(["check", "missing.json"])
        .assert()
        .failure()
        .stderr(contains("Snapshot file not found"));
}

#[test]
fn check_malformed_snapshot() {
    let dir = workspace();
    let snapshot = write_snapshot(dir.path(), r#"{"pr": {"title": "t"}}"#);

    cmd(dir.path())
        .arg("check")
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(contains("Failed to parse snapshot"));
}

#[test]
fn check_invalid_config() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("kirinus.toml"),
        "[conventional.rules.type_enum]\nlevel = \"error\"\nvalue = []\n",
    )
    .unwrap();
    let snapshot = write_snapshot(dir.path(), CLEAN_SNAPSHOT);

    cmd(dir.path())
        .arg("check")
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(contains("conventional.rules.type_enum"));
}

#[test]
fn lint_valid_message() {
    let dir = workspace();

    cmd(dir.path())
        .args(["lint", "feat(core): add parser"])
        .assert()
        .success()
        .stdout(contains("Valid"));
}

#[test]
fn lint_invalid_message() {
    let dir = workspace();

    cmd(dir.path())
        .args(["lint", "Added Parser."])
        .assert()
        .failure()
        .stdout(contains("[type-empty]"))
        .stderr(contains("not compliant"));
}

#[test]
fn lint_message_from_file() {
    let dir = workspace();
    let message = dir.path().join("COMMIT_EDITMSG");
    std::fs::write(&message, "fix: handle empty input\n\nThe parser used to panic.\n").unwrap();

    cmd(dir.path())
        .arg("lint")
        .arg("--file")
        .arg(&message)
        .assert()
        .success();
}

#[test]
fn lint_json_output() {
    let dir = workspace();

    let output = cmd(dir.path())
        .args(["--format", "json", "lint", "wip: later"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(outcome["errors"][0]["rule"], "type-enum");
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Created kirinus.toml"));

    let content = std::fs::read_to_string(dir.path().join("kirinus.toml")).unwrap();
    assert!(content.contains("[pr_lint]"));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = workspace();

    cmd(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("already exists"));

    cmd(dir.path())
        .args(["init", "--force", "--preset", "strict"])
        .assert()
        .success();
}

#[test]
fn version_prints_name() {
    let dir = workspace();

    cmd(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(contains("kirinus"));
}
