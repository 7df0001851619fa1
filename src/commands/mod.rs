//! Command handlers for the flip CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod check;
pub mod completions;
pub mod config;
pub mod play;

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

use flip::{Sequence, SequenceFile};

/// Load a sequence file and validate its entries.
pub fn load_sequence(path: &Path) -> Result<(SequenceFile, Sequence)> {
    if !path.exists() {
        anyhow::bail!("Sequence file not found: {}", path.display());
    }
    let file = SequenceFile::load(path)?;
    let sequence = file
        .sequence()
        .with_context(|| format!("In {}", path.display()))?;
    Ok((file, sequence))
}

/// Format a duration as milliseconds, or seconds once it reaches a second.
pub fn format_duration(duration: Duration) -> String {
    let ms = duration.as_secs_f64() * 1000.0;
    if ms >= 1000.0 {
        format!("{:.2} s", ms / 1000.0)
    } else if ms.fract() == 0.0 {
        format!("{} ms", ms)
    } else {
        format!("{:.1} ms", ms)
    }
}
