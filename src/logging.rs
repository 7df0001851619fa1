//! Diagnostic logging
//!
//! Logging is off unless `FLIP_LOG` holds a filter directive (for example
//! `FLIP_LOG=debug` or `FLIP_LOG=flip::player=trace`). Output goes to a
//! file so the terminal display is left alone: `FLIP_LOG_FILE` if set,
//! otherwise `flip.log` in the config directory.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::Config;

/// Filter directive variable.
pub const LOG_ENV: &str = "FLIP_LOG";
/// Log file override variable.
pub const LOG_FILE_ENV: &str = "FLIP_LOG_FILE";

/// Where log lines are written.
pub fn log_path(file_override: Option<OsString>) -> Result<PathBuf> {
    match file_override {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(Config::config_dir()?.join("flip.log")),
    }
}

/// Install the global subscriber if `FLIP_LOG` is set.
///
/// Returns the log file path when logging was enabled.
pub fn init() -> Result<Option<PathBuf>> {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => return Ok(None),
    };

    let path = log_path(std::env::var_os(LOG_FILE_ENV))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    // A subscriber may already be installed (tests); keep that one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(Some(path))
}
