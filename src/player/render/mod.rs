//! Frame rendering
//!
//! The player only needs two things from a renderer: create a visual for
//! every frame once, then show exactly one of them at a time.

mod terminal;

pub use terminal::{compose, FrameArt, TerminalRenderer};

use std::io;

use crate::sequence::Sequence;

/// Displays frames by identifier.
pub trait Renderer {
    /// Create visuals for every unique identifier. Called once, before
    /// the first frame is shown.
    fn prepare(&mut self, _sequence: &Sequence) -> io::Result<()> {
        Ok(())
    }

    /// Make `identifier` the only visible frame.
    fn show(&mut self, identifier: &str) -> io::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn prepare(&mut self, sequence: &Sequence) -> io::Result<()> {
        (**self).prepare(sequence)
    }

    fn show(&mut self, identifier: &str) -> io::Result<()> {
        (**self).show(identifier)
    }
}

/// Renderer that draws nothing and remembers what it was asked to show.
#[derive(Debug, Clone, Default)]
pub struct Headless {
    /// Identifiers passed to `show`, oldest first
    pub shown: Vec<String>,
    /// Identifiers passed to `prepare`
    pub prepared: Vec<String>,
}

impl Headless {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier currently visible.
    pub fn visible(&self) -> Option<&str> {
        self.shown.last().map(String::as_str)
    }
}

impl Renderer for Headless {
    fn prepare(&mut self, sequence: &Sequence) -> io::Result<()> {
        self.prepared = sequence
            .identifiers()
            .into_iter()
            .map(str::to_string)
            .collect();
        Ok(())
    }

    fn show(&mut self, identifier: &str) -> io::Result<()> {
        self.shown.push(identifier.to_string());
        Ok(())
    }
}
