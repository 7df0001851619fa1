//! Integration tests for the play command
//!
//! Only paths that fail before the terminal is taken over are exercised
//! here; playback itself is covered by the headless player tests.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{book_dir, flip};

#[test]
fn play_help_shows_keys() {
    let home = TempDir::new().unwrap();
    flip(home.path())
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<SEQUENCE>"))
        .stdout(predicate::str::contains("KEYS"))
        .stdout(predicate::str::contains("--frame-time-ms"));
}

#[test]
fn play_no_arguments_shows_error() {
    let home = TempDir::new().unwrap();
    flip(home.path())
        .arg("play")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<SEQUENCE>"));
}

#[test]
fn play_nonexistent_file_shows_error() {
    let home = TempDir::new().unwrap();
    flip(home.path())
        .args(["play", "missing.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Sequence file not found"))
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn play_unknown_start_frame_shows_error() {
    let home = TempDir::new().unwrap();
    flip(home.path())
        .arg("play")
        .arg(book_dir().join("book.toml"))
        .args(["--start", "nowhere.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid start"))
        .stderr(predicate::str::contains("Frame not found: nowhere.txt"));
}

#[test]
fn play_reverse_needs_start() {
    let home = TempDir::new().unwrap();
    flip(home.path())
        .arg("play")
        .arg(book_dir().join("book.toml"))
        .arg("--reverse")
        .assert()
        .code(2);
}

#[test]
fn play_missing_frame_file_shows_path() {
    let home = TempDir::new().unwrap();
    let frames = TempDir::new().unwrap();
    flip(home.path())
        .arg("play")
        .arg(book_dir().join("book.toml"))
        .arg("--dir")
        .arg(frames.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("title.txt"));
}
