//! Integration tests for top-level CLI behaviour

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::flip;

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    flip(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_starts_with_package_version() {
    let home = TempDir::new().unwrap();
    flip(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "flip {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_arguments_is_usage_error() {
    let home = TempDir::new().unwrap();
    flip(home.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    flip(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_flip"));
}

#[test]
fn logging_writes_to_requested_file() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("logs").join("flip.log");
    flip(home.path())
        .args(["config", "path"])
        .env("FLIP_LOG", "debug")
        .env("FLIP_LOG_FILE", &log)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Logging enabled"));
}
