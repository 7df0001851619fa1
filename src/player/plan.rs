//! Headless dry run of one full pass over a sequence.
//!
//! Drives a player with a hand-driven clock and records every frame it
//! renders, the delay before it advances (or `None` when it waits for the
//! user) and what happens once the sequence is exhausted.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use super::machine::{Player, DEFAULT_FRAME_TIME};
use super::render::Headless;
use super::state::PlayerState;
use super::timer::ManualClock;
use super::PlayerError;
use crate::sequence::Sequence;

/// Rendering steps after which a plan is cut short.
pub const DEFAULT_PLAN_LIMIT: usize = 10_000;

/// One rendered frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFrame {
    pub index: usize,
    pub identifier: String,
    /// Time on screen before auto-advance; `None` waits for `next`
    #[serde(serialize_with = "serialize_delay")]
    pub delay: Option<Duration>,
}

fn serialize_delay<S: serde::Serializer>(
    delay: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match delay {
        Some(delay) => serializer.serialize_some(&(delay.as_nanos() as f64 / 1e6)),
        None => serializer.serialize_none(),
    }
}

/// What happens after the final frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum PlanEnd {
    /// Playback starts over from the first frame
    Replay,
    /// The host is handed the redirect target
    Redirect(String),
    /// Nothing in the sequence is displayable
    Empty,
    /// The step limit was reached first
    Truncated,
}

impl fmt::Display for PlanEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanEnd::Replay => write!(f, "replay"),
            PlanEnd::Redirect(target) => write!(f, "redirect to {}", target),
            PlanEnd::Empty => write!(f, "nothing to display"),
            PlanEnd::Truncated => write!(f, "truncated"),
        }
    }
}

/// Frames rendered during one pass, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub frames: Vec<PlannedFrame>,
    pub end: PlanEnd,
}

impl Plan {
    /// Sum of every timed delay.
    pub fn timed_duration(&self) -> Duration {
        self.frames.iter().filter_map(|f| f.delay).sum()
    }

    /// Number of frames that wait for the user.
    pub fn manual_stops(&self) -> usize {
        self.frames.iter().filter(|f| f.delay.is_none()).count()
    }

    /// Identifiers in render order.
    pub fn identifiers(&self) -> Vec<&str> {
        self.frames.iter().map(|f| f.identifier.as_str()).collect()
    }
}

/// Options for [`plan`].
#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub frame_time: Duration,
    pub redirect: Option<String>,
    pub limit: usize,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            frame_time: DEFAULT_FRAME_TIME,
            redirect: None,
            limit: DEFAULT_PLAN_LIMIT,
        }
    }
}

/// Play `sequence` once, answering every manual stop with `next`.
pub fn plan(sequence: &Sequence, options: &PlanOptions) -> Result<Plan, PlayerError> {
    let clock = ManualClock::new();
    let mut builder = Player::builder(sequence.clone(), Headless::new())
        .frame_time(options.frame_time)
        .clock(clock.clone());
    if let Some(target) = &options.redirect {
        builder = builder.redirect(target.clone());
    }
    let mut player = builder.build()?;

    let mut frames = Vec::new();
    let mut rendered = 0;
    player.reset()?;

    for _ in 0..options.limit {
        match player.state() {
            PlayerState::Redirected => {
                let target = player.redirect_target().unwrap_or_default().to_string();
                return Ok(Plan {
                    frames,
                    end: PlanEnd::Redirect(target),
                });
            }
            PlayerState::Ended => {
                return Ok(Plan {
                    frames,
                    end: PlanEnd::Empty,
                })
            }
            _ if player.laps() > 0 => {
                return Ok(Plan {
                    frames,
                    end: PlanEnd::Replay,
                })
            }
            _ => {}
        }

        let shown = player.renderer().shown.len();
        if shown > rendered {
            rendered = shown;
            if let (Some(index), Some(identifier)) = (player.displayed(), player.displayed_frame())
            {
                frames.push(PlannedFrame {
                    index,
                    identifier: identifier.to_string(),
                    delay: player.time_until_due().filter(|_| player.is_auto_playing()),
                });
            }
        }

        match player.time_until_due() {
            Some(delay) if player.is_auto_playing() => {
                clock.advance(delay);
                player.tick()?;
            }
            _ => player.next()?,
        }
    }

    Ok(Plan {
        frames,
        end: PlanEnd::Truncated,
    })
}
