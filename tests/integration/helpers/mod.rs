//! Test helper utilities

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the sample flip-book
pub fn book_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("book")
}

/// `flip` with HOME pointed at `home` so the real config is never touched
pub fn flip(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flip").expect("flip binary not built");
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("FLIP_LOG")
        .env_remove("FLIP_LOG_FILE");
    cmd
}

/// Write `contents` as the config file under `home`
pub fn write_config(home: &TempDir, contents: &str) -> PathBuf {
    let dir = home.path().join(".config").join("flip");
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}

/// Copy the sample book into a temp dir, leaving out `skip`
pub fn copy_book(skip: &[&str]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for entry in fs::read_dir(book_dir()).expect("Failed to read fixtures") {
        let entry = entry.expect("Failed to read fixture entry");
        let name = entry.file_name();
        if skip.iter().any(|s| name == **s) {
            continue;
        }
        fs::copy(entry.path(), temp.path().join(&name)).expect("Failed to copy fixture");
    }
    temp
}
