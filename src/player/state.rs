//! Player state management
//!
//! Contains the `PlaybackState` struct owned by the player, the resolution
//! step that walks loop markers, and the observable `PlayerState`.

use tracing::trace;

use crate::sequence::{Element, Sequence};

/// Observable playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Nothing has been displayed yet (before the first reset)
    Idle,
    /// A frame is displayed and its auto-advance deadline is armed
    Armed,
    /// A frame is displayed and waits for manual navigation
    Stopped,
    /// The sequence has nothing displayable
    Ended,
    /// The terminal redirect fired; navigation is ignored until reset
    Redirected,
}

/// Central playback state.
///
/// All fields are private; the player mutates them through the methods
/// below so the loop bookkeeping cannot be changed from outside.
#[derive(Debug, Default)]
pub struct PlaybackState {
    /// Next position to resolve (one past the displayed frame after a render)
    index: usize,
    /// First element of the active loop body
    loop_body_start: usize,
    /// Completed passes over the active loop body
    loop_iteration: u32,
    /// Requested passes over the active loop body
    loop_target: u32,
    /// Whether timed advance is armed
    auto_playing: bool,
    /// Whether resolution ran past the final element
    ended: bool,
    /// Whether anything has been resolved since construction
    started: bool,
    /// Index of the frame currently on screen
    displayed: Option<usize>,
    /// Number of times playback wrapped back to the first element
    laps: u32,
    /// Redirect target once the terminal redirect fired
    redirected: Option<String>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    // === Getters ===

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    #[inline]
    pub fn displayed(&self) -> Option<usize> {
        self.displayed
    }

    #[inline]
    pub fn laps(&self) -> u32 {
        self.laps
    }

    #[inline]
    pub fn redirected(&self) -> Option<&str> {
        self.redirected.as_deref()
    }

    /// Current `(iteration, target)` of the active loop.
    #[inline]
    pub fn loop_progress(&self) -> (u32, u32) {
        (self.loop_iteration, self.loop_target)
    }

    /// Derive the observable state.
    pub fn state(&self) -> PlayerState {
        if self.redirected.is_some() {
            PlayerState::Redirected
        } else if self.ended {
            PlayerState::Ended
        } else if !self.started {
            PlayerState::Idle
        } else if self.auto_playing {
            PlayerState::Armed
        } else {
            PlayerState::Stopped
        }
    }

    // === Transitions ===

    /// Move the position without resolving.
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn set_auto_playing(&mut self, auto_playing: bool) {
        self.auto_playing = auto_playing;
    }

    /// Back to the first element with loop bookkeeping and end flags cleared.
    pub fn reset(&mut self) {
        self.index = 0;
        self.loop_body_start = 0;
        self.loop_iteration = 0;
        self.loop_target = 0;
        self.ended = false;
        self.redirected = None;
    }

    /// Record that resolution ran past the final element.
    pub fn mark_ended(&mut self) {
        self.ended = true;
        self.auto_playing = false;
    }

    /// Wrap back to the start after the final element.
    pub fn rewind(&mut self) {
        self.reset();
        self.laps = self.laps.saturating_add(1);
    }

    pub fn mark_redirected(&mut self, target: String) {
        self.redirected = Some(target);
        self.auto_playing = false;
    }

    /// Record the rendered frame and step past it.
    pub fn mark_displayed(&mut self, index: usize, auto_playing: bool) {
        self.displayed = Some(index);
        self.auto_playing = auto_playing;
        self.index = index + 1;
    }

    /// Resolve the current position to a genuine frame.
    ///
    /// Loop markers are consumed on the way: a loop start records the body
    /// and repeat count, a loop end either jumps back to the body or steps
    /// past itself. Returns `None` once the position runs past the end.
    pub fn resolve(&mut self, sequence: &Sequence) -> Option<usize> {
        self.started = true;
        loop {
            match sequence.get(self.index)? {
                Element::Frame { .. } => return Some(self.index),
                Element::LoopStart { repeat } => {
                    self.loop_body_start = self.index + 1;
                    self.loop_iteration = 0;
                    self.loop_target = *repeat;
                    self.index += 1;
                    trace!(body = self.loop_body_start, repeat, "Entered loop");
                }
                Element::LoopEnd => {
                    self.loop_iteration = self.loop_iteration.saturating_add(1);
                    if self.loop_iteration < self.loop_target {
                        self.index = self.loop_body_start;
                    } else {
                        self.index += 1;
                    }
                    trace!(
                        iteration = self.loop_iteration,
                        target = self.loop_target,
                        next = self.index,
                        "Reached loop end"
                    );
                }
            }
        }
    }
}
