//! Integration tests for the config subcommands

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{flip, write_config};

#[test]
fn config_path_is_under_home() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join(".config").join("flip").join("config.toml");
    flip(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().to_string()));
}

#[test]
fn config_init_writes_defaults_once() {
    let home = TempDir::new().unwrap();
    let path = home.path().join(".config").join("flip").join("config.toml");

    flip(home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[keys]"));

    flip(home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    flip(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_reflects_file() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[playback]\nframe_time_ms = 40.0\n");

    flip(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("frame_time_ms = 40.0"))
        .stdout(predicate::str::contains("quit = ["));
}

#[test]
fn invalid_key_name_is_reported() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[keys]\nnext = [\"Meta+z\"]\n");

    flip(home.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key name"))
        .stderr(predicate::str::contains("Meta+z"));
}
