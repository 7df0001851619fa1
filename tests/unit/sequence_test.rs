//! Unit tests for sequence files

use flip::{Direction, Element, SequenceError, SequenceFile};

use crate::helpers::{book_path, load_book};

#[test]
fn toml_book_parses_loop_and_frames() {
    let (file, sequence) = load_book("book.toml");

    assert_eq!(file.frame_time_ms, Some(50.0));
    assert!(file.redirect.is_none());
    assert_eq!(sequence.len(), 6);
    assert_eq!(sequence.loop_count(), 1);
    assert_eq!(sequence.get(1), Some(&Element::LoopStart { repeat: 3 }));
    assert_eq!(sequence.get(4), Some(&Element::LoopEnd));
    assert_eq!(
        sequence.identifiers(),
        vec!["title.txt", "walk1.txt", "walk2.txt", "end.txt"]
    );
}

#[test]
fn json_book_accepts_upper_case_keywords() {
    let (file, sequence) = load_book("book.json");

    assert_eq!(file.redirect.as_deref(), Some("https://example.com/after"));
    assert_eq!(sequence.get(1), Some(&Element::LoopStart { repeat: 2 }));
    assert_eq!(sequence.get(3), Some(&Element::LoopEnd));
    assert_eq!(sequence.find("end.txt", Direction::Forward), Some(4));
}

#[test]
fn frame_directory_defaults_to_file_location() {
    let (file, _) = load_book("book.toml");
    assert_eq!(file.frame_directory(), book_path(""));
}

#[test]
fn nested_loop_is_rejected_with_positions() {
    let file = SequenceFile::load(&book_path("broken.toml")).unwrap();
    let err = file.sequence().unwrap_err();

    let cause = err.downcast_ref::<SequenceError>().unwrap();
    assert_eq!(*cause, SequenceError::NestedLoop { position: 2, open: 0 });
}

#[test]
fn find_ignores_loop_keywords() {
    let (_, sequence) = load_book("book.toml");
    assert_eq!(sequence.find("for", Direction::Forward), None);
    assert_eq!(sequence.find("next", Direction::Backward), None);
    assert_eq!(sequence.find("walk1.txt", Direction::Backward), Some(2));
}
