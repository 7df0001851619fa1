//! Interactive terminal session
//!
//! Owns the terminal for the duration of playback:
//! - Raw mode and alternate screen, restored on every exit path
//! - Keyboard input mapped through the configured key bindings
//! - Auto-advance driven by polling until the next deadline
//! - Redraw on resize

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{info, warn};

use super::input::{dispatch, Action, KeyBindings};
use super::machine::{Player, DEFAULT_FRAME_TIME};
use super::render::TerminalRenderer;
use super::state::PlayerState;
use super::Target;
use crate::sequence::Sequence;

/// Longest wait for input while no deadline is armed.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Result of a playback session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackResult {
    /// The sequence had nothing to display
    Finished,
    /// Playback was interrupted (e.g., user pressed q)
    Interrupted,
    /// The sequence ended and handed over to this target
    Redirected(String),
}

impl PlaybackResult {
    /// Get a human-readable message for this result
    pub fn message(&self) -> String {
        match self {
            PlaybackResult::Finished => "Playback finished".to_string(),
            PlaybackResult::Interrupted => "Playback interrupted".to_string(),
            PlaybackResult::Redirected(target) => format!("Redirect: {}", target),
        }
    }
}

/// Everything a session needs besides the sequence.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Directory holding the frame files
    pub directory: PathBuf,
    pub frame_time: Duration,
    pub redirect: Option<String>,
    /// Frame file drawn behind every frame
    pub background: Option<String>,
    /// Frame to jump to after the first reset
    pub start: Option<Target>,
    /// Nothing is bound until this is filled in
    pub keys: KeyBindings,
}

impl SessionOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            frame_time: DEFAULT_FRAME_TIME,
            redirect: None,
            background: None,
            start: None,
            keys: KeyBindings::default(),
        }
    }
}

/// Play `sequence` in the terminal until it redirects or the user quits.
pub fn play_sequence(sequence: Sequence, options: &SessionOptions) -> Result<PlaybackResult> {
    let mut renderer = TerminalRenderer::new(&options.directory);
    if let Some(background) = &options.background {
        renderer = renderer.background(background.clone());
    }

    // Frames are loaded here, before the terminal is taken over
    let mut builder = Player::builder(sequence, renderer).frame_time(options.frame_time);
    if let Some(target) = &options.redirect {
        builder = builder.redirect(target.clone());
    }
    let mut player = builder.build()?;

    let mut stdout = io::stdout();
    crossterm::terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run(&mut player, options);

    // Cleanup
    execute!(stdout, Show, LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;
    stdout.flush()?;

    if let Ok(outcome) = &result {
        info!(outcome = %outcome.message(), laps = player.laps(), "Session ended");
    }
    result
}

fn run(player: &mut Player<TerminalRenderer>, options: &SessionOptions) -> Result<PlaybackResult> {
    player.reset()?;
    if let Some(start) = &options.start {
        player.jump(start.clone())?;
    }

    loop {
        match player.state() {
            PlayerState::Redirected => {
                let target = player.redirect_target().unwrap_or_default().to_string();
                return Ok(PlaybackResult::Redirected(target));
            }
            PlayerState::Ended => return Ok(PlaybackResult::Finished),
            _ => {}
        }

        let timeout = player
            .time_until_due()
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match options.keys.action_for(&key) {
                    Some(Action::Quit) => return Ok(PlaybackResult::Interrupted),
                    Some(action) => dispatch(action, player)?,
                    None => {}
                },
                Event::Resize(_, _) => {
                    if let Err(e) = player.renderer_mut().redraw() {
                        warn!(error = %e, "Redraw after resize failed");
                    }
                }
                _ => {}
            }
        }

        player.tick()?;
    }
}
