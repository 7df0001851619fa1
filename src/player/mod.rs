//! Flip-book player
//!
//! - `machine`: the playback state machine and navigation API
//! - `render`: the renderer contract and the terminal renderer
//! - `input`: key bindings and action dispatch
//! - `native`: the interactive terminal session
//! - `plan`: a headless dry run of one pass
//!
//! # Usage
//!
//! ```
//! use flip::player::{Headless, ManualClock, Player};
//! use flip::sequence::{Element, Sequence};
//!
//! let sequence = Sequence::new(vec![Element::frame("a", 0), Element::frame("b", 0)]).unwrap();
//! let mut player = Player::builder(sequence, Headless::new())
//!     .clock(ManualClock::new())
//!     .build()
//!     .unwrap();
//!
//! player.reset().unwrap();
//! player.next().unwrap();
//! assert_eq!(player.displayed_frame(), Some("b"));
//! ```

mod error;
mod input;
mod machine;
mod native;
mod plan;
mod render;
mod state;
mod target;
mod timer;

pub use error::PlayerError;
pub use input::{dispatch, parse_key, Action, KeyBinding, KeyBindings, KeyParseError};
pub use machine::{Cursor, FrameCallback, Player, PlayerBuilder, DEFAULT_FRAME_TIME};
pub use native::{play_sequence, PlaybackResult, SessionOptions};
pub use plan::{plan, Plan, PlanEnd, PlanOptions, PlannedFrame, DEFAULT_PLAN_LIMIT};
pub use render::{compose, FrameArt, Headless, Renderer, TerminalRenderer};
pub use state::PlayerState;
pub use target::Target;
pub use timer::{Clock, ManualClock, SystemClock, Timer};
