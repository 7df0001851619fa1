//! Sequence elements and raw entry parsing.
//!
//! A raw entry is a short array whose first item is a name:
//! `["a.txt", 10]`, `["for", 3]` or `["next"]`. The loop tokens are
//! matched case-insensitively.

use serde::{Deserialize, Serialize};

use super::SequenceError;

/// Reserved entry name opening a loop body.
pub const LOOP_START_TOKEN: &str = "for";

/// Reserved entry name closing a loop body.
pub const LOOP_END_TOKEN: &str = "next";

/// One element of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A displayable frame shown for `duration` frame-time units.
    ///
    /// A duration of 0 is a pause point: the frame stays until the
    /// viewer navigates manually.
    Frame { identifier: String, duration: u32 },
    /// Start of a loop body repeated `repeat` times.
    LoopStart { repeat: u32 },
    /// End of the current loop body.
    LoopEnd,
}

impl Element {
    /// Create a frame element.
    pub fn frame(identifier: impl Into<String>, duration: u32) -> Self {
        Element::Frame {
            identifier: identifier.into(),
            duration,
        }
    }

    /// True for loop markers, which are never rendered.
    #[inline]
    pub fn is_pseudo_frame(&self) -> bool {
        !matches!(self, Element::Frame { .. })
    }

    /// Frame identifier, `None` for loop markers.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Element::Frame { identifier, .. } => Some(identifier),
            _ => None,
        }
    }

    /// Frame duration in units, `None` for loop markers.
    pub fn duration(&self) -> Option<u32> {
        match self {
            Element::Frame { duration, .. } => Some(*duration),
            _ => None,
        }
    }
}

/// A single item inside a raw entry array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryField {
    Number(i64),
    Name(String),
}

/// Raw entry as it appears in a sequence file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawEntry(pub Vec<EntryField>);

impl RawEntry {
    /// Convenience constructor for a frame entry.
    pub fn frame(identifier: &str, duration: i64) -> Self {
        RawEntry(vec![
            EntryField::Name(identifier.to_string()),
            EntryField::Number(duration),
        ])
    }

    /// Convert into an element, `position` is used in error messages.
    pub fn into_element(self, position: usize) -> Result<Element, SequenceError> {
        let mut fields = self.0.into_iter();

        let name = match fields.next() {
            Some(EntryField::Name(name)) => name,
            Some(EntryField::Number(_)) => {
                return Err(SequenceError::MissingName { position });
            }
            None => return Err(SequenceError::EmptyEntry { position }),
        };
        let number = match fields.next() {
            Some(EntryField::Number(n)) => Some(to_count(n, position)?),
            Some(EntryField::Name(_)) => return Err(SequenceError::NotANumber { position }),
            None => None,
        };
        if fields.next().is_some() {
            return Err(SequenceError::TrailingFields { position });
        }

        if name.eq_ignore_ascii_case(LOOP_START_TOKEN) {
            let repeat = number.ok_or(SequenceError::MissingRepeat { position })?;
            Ok(Element::LoopStart { repeat })
        } else if name.eq_ignore_ascii_case(LOOP_END_TOKEN) {
            Ok(Element::LoopEnd)
        } else {
            Ok(Element::Frame {
                identifier: name,
                duration: number.unwrap_or(0),
            })
        }
    }
}

impl From<&Element> for RawEntry {
    fn from(element: &Element) -> Self {
        match element {
            Element::Frame {
                identifier,
                duration,
            } => RawEntry::frame(identifier, i64::from(*duration)),
            Element::LoopStart { repeat } => RawEntry(vec![
                EntryField::Name(LOOP_START_TOKEN.to_string()),
                EntryField::Number(i64::from(*repeat)),
            ]),
            Element::LoopEnd => RawEntry(vec![EntryField::Name(LOOP_END_TOKEN.to_string())]),
        }
    }
}

fn to_count(n: i64, position: usize) -> Result<u32, SequenceError> {
    u32::try_from(n).map_err(|_| SequenceError::InvalidNumber { position, value: n })
}
