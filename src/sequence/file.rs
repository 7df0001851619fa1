//! Sequence file loading (TOML or JSON)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::{RawEntry, Sequence};

/// On-disk description of a flip-book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SequenceFile {
    /// Ordered raw entries
    pub frames: Vec<RawEntry>,
    /// Duration of one frame unit in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_time_ms: Option<f64>,
    /// Address handed to the host when the sequence is exhausted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    /// Frame drawn underneath every frame
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Directory frame identifiers are resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// Directory containing the file itself (set by `load`)
    #[serde(skip)]
    pub origin: Option<PathBuf>,
}

impl SequenceFile {
    /// Load a sequence file; `.json` files are JSON, everything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read sequence file: {}", path.display()))?;
        let mut file = if is_json(path) {
            Self::from_json(&contents)
        } else {
            Self::from_toml(&contents)
        }
        .with_context(|| format!("Failed to parse sequence file: {}", path.display()))?;
        file.origin = path.parent().map(Path::to_path_buf);
        Ok(file)
    }

    /// Parse TOML contents.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse JSON contents.
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Validate the entries into a sequence.
    pub fn sequence(&self) -> Result<Sequence> {
        Sequence::from_entries(self.frames.clone()).context("Invalid sequence")
    }

    /// Directory frame files live in.
    ///
    /// A relative `directory` is taken relative to the file's own location.
    pub fn frame_directory(&self) -> PathBuf {
        let origin = self.origin.clone().unwrap_or_default();
        match &self.directory {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => origin.join(dir),
            None => origin,
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
