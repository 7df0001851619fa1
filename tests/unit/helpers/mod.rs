//! Test helper utilities

#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use flip::player::{Headless, ManualClock, Player};
use flip::{Sequence, SequenceFile};

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a file in the sample flip-book
pub fn book_path(name: &str) -> PathBuf {
    fixtures_dir().join("book").join(name)
}

/// Load and validate a sample sequence file
pub fn load_book(name: &str) -> (SequenceFile, Sequence) {
    let file = SequenceFile::load(&book_path(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {:#}", name, e));
    let sequence = file.sequence().expect("Fixture sequence is invalid");
    (file, sequence)
}

/// Headless player over `sequence` driven by the returned clock
pub fn headless_player(
    sequence: Sequence,
    frame_ms: u64,
) -> (Player<Headless, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let player = Player::builder(sequence, Headless::new())
        .frame_time(Duration::from_millis(frame_ms))
        .clock(clock.clone())
        .build()
        .expect("Failed to build player");
    (player, clock)
}

/// Identifiers the renderer was asked to show, oldest first
pub fn shown(player: &Player<Headless, ManualClock>) -> Vec<&str> {
    player
        .renderer()
        .shown
        .iter()
        .map(String::as_str)
        .collect()
}

/// Let the armed deadline expire and fire it
pub fn expire(player: &mut Player<Headless, ManualClock>, clock: &ManualClock) -> bool {
    if let Some(due) = player.time_until_due() {
        clock.advance(due);
    }
    player.tick().expect("tick failed")
}
