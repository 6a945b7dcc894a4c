//! Integration tests for the clear command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::moodlog_cmd;

fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    moodlog_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_clear_requires_confirmation() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "3"])
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));

    // Entry still there
    moodlog_cmd()
        .current_dir(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fine"));
}

#[test]
fn test_clear_with_confirmation_removes_everything() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "3"])
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All entries cleared"));

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_clear_is_idempotent() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["clear", "--yes"])
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["clear", "--yes"])
        .assert()
        .success();
}

#[test]
fn test_clear_keeps_config() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["config", "min_insight_entries", "3"])
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["clear", "--yes"])
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("min_insight_entries")
        .assert()
        .success()
        .stdout(predicate::str::contains("3"));
}
