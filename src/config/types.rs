//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub keys: KeysConfig,
}

/// Playback timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Milliseconds per duration unit
    #[serde(default = "default_frame_time_ms")]
    pub frame_time_ms: f64,
}

pub fn default_frame_time_ms() -> f64 {
    1000.0 / 12.0
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_time_ms: default_frame_time_ms(),
        }
    }
}

impl PlaybackConfig {
    /// Frame time as a duration, `None` when negative or not finite.
    pub fn frame_time(&self) -> Option<Duration> {
        frame_time_from_ms(self.frame_time_ms)
    }
}

/// Convert a millisecond count into a frame time.
pub fn frame_time_from_ms(ms: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(ms / 1000.0).ok()
}

/// Display settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Frame drawn behind every other frame, relative to the frame directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// Key names bound to each action. An empty list disables the action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeysConfig {
    #[serde(default = "default_next_keys")]
    pub next: Vec<String>,
    #[serde(default = "default_skip_keys")]
    pub skip: Vec<String>,
    #[serde(default = "default_prev_keys")]
    pub prev: Vec<String>,
    #[serde(default = "default_stop_keys")]
    pub stop: Vec<String>,
    #[serde(default = "default_reset_keys")]
    pub reset: Vec<String>,
    #[serde(default = "default_quit_keys")]
    pub quit: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn default_next_keys() -> Vec<String> {
    keys(&["z", "Z", "Space", "Enter", "Right"])
}

pub fn default_skip_keys() -> Vec<String> {
    keys(&["x", "X"])
}

pub fn default_prev_keys() -> Vec<String> {
    keys(&["Backspace", "Left"])
}

pub fn default_stop_keys() -> Vec<String> {
    keys(&["p", "P", "Down"])
}

pub fn default_reset_keys() -> Vec<String> {
    keys(&["t", "T", "Esc", "Up"])
}

pub fn default_quit_keys() -> Vec<String> {
    keys(&["q", "Q", "Ctrl+c"])
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            next: default_next_keys(),
            skip: default_skip_keys(),
            prev: default_prev_keys(),
            stop: default_stop_keys(),
            reset: default_reset_keys(),
            quit: default_quit_keys(),
        }
    }
}
