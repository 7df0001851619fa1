//! Unit tests for the headless playback plan

use flip::player::{plan, PlanEnd, PlanOptions};
use std::time::Duration;

use crate::helpers::load_book;

fn options(frame_ms: u64, redirect: Option<String>) -> PlanOptions {
    PlanOptions {
        frame_time: Duration::from_millis(frame_ms),
        redirect,
        ..PlanOptions::default()
    }
}

#[test]
fn toml_book_plan() {
    let (_, sequence) = load_book("book.toml");
    let plan = plan(&sequence, &options(50, None)).unwrap();

    assert_eq!(plan.frames.len(), 8);
    assert_eq!(plan.frames[0].identifier, "title.txt");
    assert_eq!(plan.frames[0].delay, None);
    assert!(plan.frames[1..7]
        .iter()
        .all(|f| f.delay == Some(Duration::from_millis(100))));
    assert_eq!(plan.frames[7].index, 5);
    assert_eq!(plan.end, PlanEnd::Replay);
    assert_eq!(plan.timed_duration(), Duration::from_millis(600));
}

#[test]
fn json_book_plan_redirects() {
    let (file, sequence) = load_book("book.json");
    let plan = plan(&sequence, &options(50, file.redirect.clone())).unwrap();

    assert_eq!(
        plan.identifiers(),
        vec!["title.txt", "walk1.txt", "walk1.txt", "end.txt"]
    );
    assert_eq!(
        plan.end,
        PlanEnd::Redirect("https://example.com/after".to_string())
    );
    assert_eq!(plan.manual_stops(), 1);
}

#[test]
fn plan_indices_point_at_frames() {
    let (_, sequence) = load_book("book.toml");
    let plan = plan(&sequence, &options(10, None)).unwrap();

    for frame in &plan.frames {
        assert!(!sequence.is_pseudo_frame(frame.index));
    }
}
