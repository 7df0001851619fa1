//! Integration tests for the check command

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{book_dir, copy_book, flip, write_config};

#[test]
fn check_prints_summary_and_plan() {
    let home = TempDir::new().unwrap();
    flip(home.path())
        .arg("check")
        .arg(book_dir().join("book.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("6 entries, 4 frames (4 unique), 1 loop"))
        .stdout(predicate::str::contains("Frame time: 50 ms"))
        .stdout(predicate::str::contains("title.txt  manual"))
        .stdout(predicate::str::contains("walk2.txt  100 ms"))
        .stdout(predicate::str::contains("Then: replay"));
}

#[test]
fn check_json_report() {
    let home = TempDir::new().unwrap();
    let output = flip(home.path())
        .args(["check", "--json"])
        .arg(book_dir().join("book.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["entries"], 5);
    assert_eq!(report["loops"], 1);
    assert_eq!(report["plan"]["frames"].as_array().unwrap().len(), 4);
    assert_eq!(report["plan"]["frames"][0]["delay"], serde_json::Value::Null);
    assert_eq!(report["plan"]["frames"][1]["delay"], 50.0);
    assert_eq!(report["plan"]["end"]["action"], "redirect");
    assert_eq!(report["plan"]["end"]["target"], "https://example.com/after");
}

#[test]
fn check_rejects_nested_loops() {
    let home = TempDir::new().unwrap();
    flip(home.path())
        .arg("check")
        .arg(book_dir().join("broken.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nested loops are not supported"));
}

#[test]
fn check_lists_missing_frames() {
    let home = TempDir::new().unwrap();
    let book = copy_book(&["walk2.txt", "end.txt"]);

    flip(home.path())
        .arg("check")
        .arg(book.path().join("book.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing frame files"))
        .stderr(predicate::str::contains("walk2.txt, end.txt"));
}

#[test]
fn check_uses_config_background() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[display]\nbackground = \"bg.txt\"\n");

    flip(home.path())
        .arg("check")
        .arg(book_dir().join("book.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Background: bg.txt"));
}

#[test]
fn check_missing_file() {
    let home = TempDir::new().unwrap();
    flip(home.path())
        .args(["check", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sequence file not found"));
}
