//! flip - flip-book player library
//!
//! Plays frame sequences with optional repeat loops, timed auto-advance,
//! manual navigation and an end-of-sequence replay or redirect.

pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod sequence;

pub use config::Config;
pub use player::{
    play_sequence, plan, PlaybackResult, Player, PlayerBuilder, PlayerError, PlayerState, Target,
};
pub use sequence::{Direction, Element, Sequence, SequenceError, SequenceFile};
