//! Sequence model
//!
//! An immutable, validated list of frames and loop markers. Built once
//! and shared read-only with the player, the renderer and the per-frame
//! callback.

mod element;
mod file;

pub use element::{Element, EntryField, RawEntry, LOOP_END_TOKEN, LOOP_START_TOKEN};
pub use file::SequenceFile;

use thiserror::Error;

/// Errors raised while building a sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("entry {position}: empty entry")]
    EmptyEntry { position: usize },

    #[error("entry {position}: first item must be a frame name or loop keyword")]
    MissingName { position: usize },

    #[error("entry {position}: second item must be a number")]
    NotANumber { position: usize },

    #[error("entry {position}: {value} is not a valid count (expected 0..=4294967295)")]
    InvalidNumber { position: usize, value: i64 },

    #[error("entry {position}: too many items")]
    TrailingFields { position: usize },

    #[error("entry {position}: \"for\" needs a repeat count")]
    MissingRepeat { position: usize },

    #[error("entry {position}: loop opened while the loop at entry {open} is still open (nested loops are not supported)")]
    NestedLoop { position: usize, open: usize },

    #[error("entry {position}: \"next\" without a matching \"for\"")]
    UnmatchedLoopEnd { position: usize },

    #[error("entry {open}: loop is never closed")]
    UnclosedLoop { open: usize },
}

/// Scan direction for identifier lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Scan from the first element towards the last.
    #[default]
    Forward,
    /// Scan from the last element towards the first.
    Backward,
}

/// Ordered, validated list of frames and loop markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    elements: Vec<Element>,
}

impl Sequence {
    /// Build a sequence, rejecting malformed loop nesting.
    pub fn new(elements: Vec<Element>) -> Result<Self, SequenceError> {
        let mut open: Option<usize> = None;
        for (position, element) in elements.iter().enumerate() {
            match element {
                Element::LoopStart { .. } => {
                    if let Some(open) = open {
                        return Err(SequenceError::NestedLoop { position, open });
                    }
                    open = Some(position);
                }
                Element::LoopEnd => {
                    if open.take().is_none() {
                        return Err(SequenceError::UnmatchedLoopEnd { position });
                    }
                }
                Element::Frame { .. } => {}
            }
        }
        if let Some(open) = open {
            return Err(SequenceError::UnclosedLoop { open });
        }
        Ok(Self { elements })
    }

    /// Build a sequence from raw file entries.
    pub fn from_entries(entries: Vec<RawEntry>) -> Result<Self, SequenceError> {
        let elements = entries
            .into_iter()
            .enumerate()
            .map(|(position, entry)| entry.into_element(position))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(elements)
    }

    /// Total number of elements, loop markers included.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`, `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// True when `index` holds a loop marker.
    pub fn is_pseudo_frame(&self, index: usize) -> bool {
        self.get(index).is_some_and(Element::is_pseudo_frame)
    }

    /// All elements in order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Iterate genuine frames as `(index, identifier, duration)`.
    pub fn frames(&self) -> impl Iterator<Item = (usize, &str, u32)> {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(i, e)| match e {
                Element::Frame {
                    identifier,
                    duration,
                } => Some((i, identifier.as_str(), *duration)),
                _ => None,
            })
    }

    /// Unique frame identifiers in order of first appearance.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for (_, identifier, _) in self.frames() {
            if !seen.contains(&identifier) {
                seen.push(identifier);
            }
        }
        seen
    }

    /// Number of loops in the sequence.
    pub fn loop_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::LoopStart { .. }))
            .count()
    }

    /// Find the first frame named `identifier`, scanning from either end.
    ///
    /// The scan always starts at the first (or last) element, never at
    /// the current playback position. Loop markers never match.
    pub fn find(&self, identifier: &str, direction: Direction) -> Option<usize> {
        let matches = |e: &Element| e.identifier() == Some(identifier);
        match direction {
            Direction::Forward => self.elements.iter().position(matches),
            Direction::Backward => self.elements.iter().rposition(matches),
        }
    }
}
