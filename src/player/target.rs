//! Navigation targets: an index or a frame identifier.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::PlayerError;
use crate::sequence::{Direction, Sequence};

/// Where `jump` / `set_index` should move to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A raw position, loop markers included.
    Index(usize),
    /// The first frame with this identifier, scanning in `direction`.
    Frame {
        identifier: String,
        direction: Direction,
    },
}

impl Target {
    /// Frame lookup scanning backwards from the last element.
    pub fn last(identifier: impl Into<String>) -> Self {
        Target::Frame {
            identifier: identifier.into(),
            direction: Direction::Backward,
        }
    }

    /// Same target with a different scan direction (indices are unaffected).
    pub fn with_direction(self, direction: Direction) -> Self {
        match self {
            Target::Frame { identifier, .. } => Target::Frame {
                identifier,
                direction,
            },
            index => index,
        }
    }

    /// Resolve to a position in `sequence`.
    pub fn locate(&self, sequence: &Sequence) -> Result<usize, PlayerError> {
        match self {
            Target::Index(index) if *index < sequence.len() => Ok(*index),
            Target::Index(index) => Err(PlayerError::IndexOutOfRange {
                index: *index,
                len: sequence.len(),
            }),
            Target::Frame {
                identifier,
                direction,
            } => sequence
                .find(identifier, *direction)
                .ok_or_else(|| PlayerError::FrameNotFound {
                    identifier: identifier.clone(),
                }),
        }
    }
}

impl From<usize> for Target {
    fn from(index: usize) -> Self {
        Target::Index(index)
    }
}

impl From<&str> for Target {
    fn from(identifier: &str) -> Self {
        Target::Frame {
            identifier: identifier.to_string(),
            direction: Direction::Forward,
        }
    }
}

impl From<String> for Target {
    fn from(identifier: String) -> Self {
        Target::Frame {
            identifier,
            direction: Direction::Forward,
        }
    }
}

/// Unsigned integers are indices, anything else a forward identifier.
impl FromStr for Target {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(index) => Target::Index(index),
            Err(_) => Target::from(s),
        })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Index(index) => write!(f, "#{}", index),
            Target::Frame {
                identifier,
                direction: Direction::Forward,
            } => write!(f, "{}", identifier),
            Target::Frame { identifier, .. } => write!(f, "{} (from end)", identifier),
        }
    }
}
