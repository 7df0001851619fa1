//! Unit tests for the player driven through the public API

use flip::player::{Headless, PlayerError, PlayerState, Target};
use flip::{Element, Player};
use std::time::Duration;

use crate::helpers::{expire, headless_player, load_book, shown};

// ============================================================================
// Auto-advance through loops
// ============================================================================

#[test]
fn walk_cycle_repeats_three_times() {
    let (_, sequence) = load_book("book.toml");
    let (mut player, clock) = headless_player(sequence, 50);

    player.reset().unwrap();
    assert_eq!(player.state(), PlayerState::Stopped);

    player.next().unwrap();
    assert_eq!(player.time_until_due(), Some(Duration::from_millis(100)));
    while expire(&mut player, &clock) {}

    assert_eq!(
        shown(&player),
        vec![
            "title.txt",
            "walk1.txt",
            "walk2.txt",
            "walk1.txt",
            "walk2.txt",
            "walk1.txt",
            "walk2.txt",
            "end.txt"
        ]
    );
    assert_eq!(player.state(), PlayerState::Stopped);
    assert_eq!(player.loop_progress(), (3, 3));
}

#[test]
fn end_without_redirect_replays() {
    let (_, sequence) = load_book("book.toml");
    let (mut player, clock) = headless_player(sequence, 50);

    player.reset().unwrap();
    player.jump("end.txt").unwrap();
    player.next().unwrap();

    assert_eq!(player.displayed_frame(), Some("title.txt"));
    assert_eq!(player.laps(), 1);
    assert_eq!(player.loop_progress(), (0, 0));

    // Playback carries on exactly as after a fresh reset
    player.next().unwrap();
    assert!(expire(&mut player, &clock));
    assert_eq!(player.displayed_frame(), Some("walk2.txt"));
}

#[test]
fn end_with_redirect_fires_once() {
    let (file, sequence) = load_book("book.json");
    let clock = flip::player::ManualClock::new();
    let mut player = Player::builder(sequence, Headless::new())
        .frame_time(Duration::from_millis(50))
        .redirect(file.redirect.clone().unwrap())
        .clock(clock.clone())
        .build()
        .unwrap();

    player.reset().unwrap();
    player.next().unwrap();
    while expire(&mut player, &clock) {}

    assert_eq!(player.state(), PlayerState::Redirected);
    assert_eq!(player.redirect_target(), Some("https://example.com/after"));
    assert_eq!(
        shown(&player),
        vec!["title.txt", "walk1.txt", "walk1.txt", "end.txt"]
    );

    // Nothing advances any more
    player.next().unwrap();
    player.prev().unwrap();
    assert!(!expire(&mut player, &clock));
    assert_eq!(shown(&player).len(), 4);

    player.reset().unwrap();
    assert_eq!(player.state(), PlayerState::Stopped);
    assert_eq!(player.displayed_frame(), Some("title.txt"));
}

// ============================================================================
// Manual navigation
// ============================================================================

#[test]
fn prev_skips_loop_markers() {
    let (_, sequence) = load_book("book.toml");
    let (mut player, _clock) = headless_player(sequence, 50);

    player.reset().unwrap();
    player.next().unwrap();
    assert_eq!(player.displayed(), Some(2));

    player.prev().unwrap();
    assert_eq!(player.displayed_frame(), Some("title.txt"));

    // Clamped at the start
    player.prev().unwrap();
    assert_eq!(player.displayed(), Some(0));
}

#[test]
fn next_is_ignored_while_armed() {
    let (_, sequence) = load_book("book.toml");
    let (mut player, _clock) = headless_player(sequence, 50);

    player.reset().unwrap();
    player.next().unwrap();
    player.next().unwrap();
    player.next().unwrap();

    assert_eq!(shown(&player), vec!["title.txt", "walk1.txt"]);
}

#[test]
fn jump_by_identifier_and_direction() {
    let (_, sequence) = load_book("book.toml");
    let (mut player, _clock) = headless_player(sequence, 50);

    player.reset().unwrap();
    player.jump(Target::last("walk2.txt")).unwrap();
    assert_eq!(player.displayed(), Some(3));
    assert!(player.is_auto_playing());

    player.jump("end.txt").unwrap();
    assert_eq!(player.displayed(), Some(5));
    assert!(!player.is_auto_playing());
}

#[test]
fn bad_targets_leave_state_untouched() {
    let (_, sequence) = load_book("book.toml");
    let (mut player, _clock) = headless_player(sequence, 50);
    player.reset().unwrap();

    assert!(matches!(
        player.jump("missing.txt"),
        Err(PlayerError::FrameNotFound { .. })
    ));
    assert!(matches!(
        player.set_index(6usize),
        Err(PlayerError::IndexOutOfRange { index: 6, len: 6 })
    ));
    assert_eq!(player.displayed_frame(), Some("title.txt"));
    assert_eq!(player.index(), 1);
}

#[test]
fn stop_neutralises_armed_deadline() {
    let (_, sequence) = load_book("book.toml");
    let (mut player, clock) = headless_player(sequence, 50);

    player.reset().unwrap();
    player.next().unwrap();
    player.stop();
    assert_eq!(player.state(), PlayerState::Stopped);

    assert!(!expire(&mut player, &clock));
    assert_eq!(player.displayed_frame(), Some("walk1.txt"));

    // Manual navigation works again once stopped
    player.next().unwrap();
    assert_eq!(player.displayed_frame(), Some("walk2.txt"));
}

// ============================================================================
// Per-frame callback
// ============================================================================

#[test]
fn callback_skipping_a_frame_still_counts_loop_passes() {
    let (_, sequence) = load_book("book.toml");
    let clock = flip::player::ManualClock::new();
    let mut player = Player::builder(sequence, Headless::new())
        .frame_time(Duration::from_millis(50))
        .clock(clock.clone())
        .on_frame(|cursor, index, sequence| {
            if sequence.get(index).and_then(Element::identifier) == Some("walk2.txt") {
                cursor.set_index(index + 1).unwrap();
            }
        })
        .build()
        .unwrap();

    player.reset().unwrap();
    player.next().unwrap();
    while expire(&mut player, &clock) {}

    assert_eq!(
        shown(&player),
        vec!["title.txt", "walk1.txt", "walk1.txt", "walk1.txt", "end.txt"]
    );
}
