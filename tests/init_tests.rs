//! Integration tests for init and config commands

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::moodlog_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    // Check .moodlog directory exists
    assert!(temp.path().join(".moodlog").exists());

    // Check config.toml exists
    let config_path = temp.path().join(".moodlog/config.toml");
    assert!(config_path.exists());

    // Check config content
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("min_insight_entries = 7"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    // First init succeeds
    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    // Second init fails
    moodlog_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_uninitialized_directory_fails_with_hint() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("history")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("moodlog init"));
}

#[test]
fn test_config_get_threshold() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("min_insight_entries")
        .assert()
        .success()
        .stdout(predicate::str::contains("7"));
}

#[test]
fn test_config_set_threshold() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("min_insight_entries")
        .arg("3")
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

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("min_insight_entries = 7"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("created")
        .arg("2020-01-01T00:00:00Z")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("editor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_moodlog_root_env_var() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    moodlog_cmd()
        .current_dir(elsewhere.path())
        .env("MOODLOG_ROOT", temp.path())
        .arg("config")
        .arg("min_insight_entries")
        .assert()
        .success()
        .stdout(predicate::str::contains("7"));
}
