//! Playback state machine and navigation API
//!
//! `Player` turns navigation calls and timer ticks into rendered frames.
//! Every call runs to completion: resolve the position through loop
//! markers, give the per-frame callback a chance to move it, render, then
//! arm the timer for the frame's duration.

use std::fmt;
use std::time::Duration;

use tracing::{debug, info, trace};

use super::render::Renderer;
use super::state::{PlaybackState, PlayerState};
use super::timer::{Clock, SystemClock, Timer};
use super::{PlayerError, Target};
use crate::sequence::{Element, Sequence};

/// Duration of one frame unit when none is configured (12 units per second).
pub const DEFAULT_FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 12);

/// Per-frame hook, called with the resolved index before rendering.
pub type FrameCallback = Box<dyn FnMut(&mut Cursor<'_>, usize, &Sequence)>;

/// Index-only view of the player handed to the per-frame callback.
///
/// Moving the cursor redirects the frame about to be rendered. Nothing
/// else about the player is reachable from here.
pub struct Cursor<'a> {
    state: &'a mut PlaybackState,
    sequence: &'a Sequence,
    moved: bool,
}

impl<'a> Cursor<'a> {
    fn new(state: &'a mut PlaybackState, sequence: &'a Sequence) -> Self {
        Self {
            state,
            sequence,
            moved: false,
        }
    }

    /// Current position.
    pub fn index(&self) -> usize {
        self.state.index()
    }

    /// Total number of entries, loop markers included.
    pub fn count(&self) -> usize {
        self.sequence.len()
    }

    /// Move the upcoming frame to `target`.
    pub fn set_index(&mut self, target: impl Into<Target>) -> Result<(), PlayerError> {
        let index = target.into().locate(self.sequence)?;
        self.state.set_index(index);
        self.moved = true;
        Ok(())
    }
}

/// Builder for [`Player`].
pub struct PlayerBuilder<R, C = SystemClock> {
    sequence: Sequence,
    renderer: R,
    clock: C,
    frame_time: Duration,
    redirect: Option<String>,
    callback: Option<FrameCallback>,
}

impl<R: Renderer> PlayerBuilder<R, SystemClock> {
    fn new(sequence: Sequence, renderer: R) -> Self {
        Self {
            sequence,
            renderer,
            clock: SystemClock::new(),
            frame_time: DEFAULT_FRAME_TIME,
            redirect: None,
            callback: None,
        }
    }
}

impl<R: Renderer, C: Clock> PlayerBuilder<R, C> {
    /// Duration of one frame unit.
    pub fn frame_time(mut self, frame_time: Duration) -> Self {
        self.frame_time = frame_time;
        self
    }

    /// Hand `target` to the host once the sequence is exhausted instead
    /// of replaying.
    pub fn redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    /// Call `callback` before each frame is rendered.
    pub fn on_frame<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut Cursor<'_>, usize, &Sequence) + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Use a different time source.
    pub fn clock<C2: Clock>(self, clock: C2) -> PlayerBuilder<R, C2> {
        PlayerBuilder {
            sequence: self.sequence,
            renderer: self.renderer,
            clock,
            frame_time: self.frame_time,
            redirect: self.redirect,
            callback: self.callback,
        }
    }

    /// Prepare the renderer and build an idle player.
    pub fn build(mut self) -> Result<Player<R, C>, PlayerError> {
        self.renderer.prepare(&self.sequence)?;
        debug!(
            entries = self.sequence.len(),
            frame_time_ms = self.frame_time.as_secs_f64() * 1000.0,
            redirect = ?self.redirect,
            "Player ready"
        );
        Ok(Player {
            sequence: self.sequence,
            renderer: self.renderer,
            timer: Timer::new(self.clock),
            frame_time: self.frame_time,
            redirect: self.redirect,
            callback: self.callback,
            state: PlaybackState::new(),
        })
    }
}

/// Flip-book player.
///
/// Created idle; call [`Player::reset`] to display the first frame. The
/// host must call [`Player::tick`] regularly (see
/// [`Player::time_until_due`]) for auto-advance to happen.
pub struct Player<R, C = SystemClock>
where
    C: Clock,
{
    sequence: Sequence,
    renderer: R,
    timer: Timer<C>,
    frame_time: Duration,
    redirect: Option<String>,
    callback: Option<FrameCallback>,
    state: PlaybackState,
}

impl<R: Renderer> Player<R, SystemClock> {
    pub fn builder(sequence: Sequence, renderer: R) -> PlayerBuilder<R, SystemClock> {
        PlayerBuilder::new(sequence, renderer)
    }
}

impl<R: Renderer, C: Clock> Player<R, C> {
    // === Navigation ===

    /// Show the next frame, unless auto-advance is armed.
    pub fn next(&mut self) -> Result<(), PlayerError> {
        if self.state.is_auto_playing() {
            trace!("next ignored while auto-playing");
            return Ok(());
        }
        self.resume()
    }

    /// Show the frame before the displayed one.
    ///
    /// Loop markers are skipped and the position clamps at the start. Works
    /// while auto-playing; the new frame re-arms the timer.
    pub fn prev(&mut self) -> Result<(), PlayerError> {
        let mut target = self.state.index().checked_sub(2);
        while let Some(index) = target {
            if !self.sequence.is_pseudo_frame(index) {
                break;
            }
            target = index.checked_sub(1);
        }
        self.state.set_index(target.unwrap_or(0));
        self.resume()
    }

    /// Cancel auto-advance, move to `target` and show it immediately.
    pub fn jump(&mut self, target: impl Into<Target>) -> Result<(), PlayerError> {
        self.timer.cancel();
        self.set_index(target)?;
        self.resume()
    }

    /// Move to `target` without rendering.
    pub fn set_index(&mut self, target: impl Into<Target>) -> Result<(), PlayerError> {
        let target = target.into();
        let index = target.locate(&self.sequence)?;
        debug!(%target, index, "Position set");
        self.state.set_index(index);
        Ok(())
    }

    /// Back to the first frame.
    pub fn reset(&mut self) -> Result<(), PlayerError> {
        self.state.reset();
        self.resume()
    }

    /// Disarm auto-advance, keeping the current frame.
    ///
    /// An armed deadline is left in place and ignored when it fires.
    pub fn stop(&mut self) {
        if self.state.is_auto_playing() {
            debug!(index = ?self.state.displayed(), "Auto-advance stopped");
        }
        self.state.set_auto_playing(false);
    }

    /// Fire the auto-advance deadline if it is due.
    ///
    /// Returns true when a new frame was resolved.
    pub fn tick(&mut self) -> Result<bool, PlayerError> {
        if !self.timer.take_due() {
            return Ok(false);
        }
        if !self.state.is_auto_playing() {
            trace!("Deadline fired after stop; ignored");
            return Ok(false);
        }
        self.advance()?;
        Ok(true)
    }

    /// How long the host may wait before calling `tick`.
    pub fn time_until_due(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    // === Accessors ===

    /// Next position to resolve; one past the displayed frame after a render.
    pub fn index(&self) -> usize {
        self.state.index()
    }

    /// Total number of entries, loop markers included.
    pub fn count(&self) -> usize {
        self.sequence.len()
    }

    /// Index of the frame on screen.
    pub fn displayed(&self) -> Option<usize> {
        self.state.displayed()
    }

    /// Identifier of the frame on screen.
    pub fn displayed_frame(&self) -> Option<&str> {
        self.displayed()
            .and_then(|i| self.sequence.get(i))
            .and_then(Element::identifier)
    }

    pub fn is_auto_playing(&self) -> bool {
        self.state.is_auto_playing()
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }

    pub fn state(&self) -> PlayerState {
        self.state.state()
    }

    /// Number of times playback wrapped around to the first frame.
    pub fn laps(&self) -> u32 {
        self.state.laps()
    }

    /// Target of the terminal redirect, once it has fired.
    pub fn redirect_target(&self) -> Option<&str> {
        self.state.redirected()
    }

    /// Current `(iteration, target)` of the active loop.
    pub fn loop_progress(&self) -> (u32, u32) {
        self.state.loop_progress()
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    // === State machine ===

    /// Replay or redirect when ended, otherwise advance.
    fn resume(&mut self) -> Result<(), PlayerError> {
        if self.state.redirected().is_some() {
            trace!("Navigation ignored after redirect");
            return Ok(());
        }
        if self.state.is_ended() {
            if let Some(target) = self.redirect.clone() {
                self.finish_with_redirect(target);
                return Ok(());
            }
            return self.reset();
        }
        self.advance()
    }

    /// Resolve, notify, render and arm.
    fn advance(&mut self) -> Result<(), PlayerError> {
        let mut wrapped = false;
        let mut notified = false;

        let index = loop {
            let Some(index) = self.state.resolve(&self.sequence) else {
                self.state.mark_ended();
                if let Some(target) = self.redirect.clone() {
                    self.finish_with_redirect(target);
                    return Ok(());
                }
                if wrapped {
                    debug!("Sequence has nothing to display");
                    self.timer.cancel();
                    return Ok(());
                }
                wrapped = true;
                self.state.rewind();
                debug!(laps = self.state.laps(), "Replaying from the start");
                continue;
            };

            if notified || !self.notify(index) {
                break index;
            }
            // The callback moved the position: re-check once from there
            notified = true;
        };

        let duration = match self.sequence.get(index) {
            Some(Element::Frame {
                identifier,
                duration,
            }) => {
                trace!(index, %identifier, duration, "Rendering frame");
                self.renderer.show(identifier)?;
                *duration
            }
            _ => return Ok(()),
        };

        let auto_playing = duration > 0;
        self.state.mark_displayed(index, auto_playing);
        if auto_playing {
            let delay = self
                .frame_time
                .checked_mul(duration)
                .unwrap_or(Duration::MAX);
            self.timer.arm(delay);
            trace!(delay_ms = delay.as_millis() as u64, "Auto-advance armed");
        } else {
            self.timer.cancel();
        }
        Ok(())
    }

    /// Run the per-frame callback. Returns true if it moved the position.
    fn notify(&mut self, index: usize) -> bool {
        let Some(callback) = self.callback.as_mut() else {
            return false;
        };
        let mut cursor = Cursor::new(&mut self.state, &self.sequence);
        callback(&mut cursor, index, &self.sequence);
        if cursor.moved {
            debug!(from = index, to = cursor.index(), "Callback moved position");
        }
        cursor.moved
    }

    fn finish_with_redirect(&mut self, target: String) {
        info!(%target, "Sequence finished; redirecting");
        self.timer.cancel();
        self.state.mark_redirected(target);
    }
}

impl<R, C: Clock> fmt::Debug for Player<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("entries", &self.sequence.len())
            .field("frame_time", &self.frame_time)
            .field("redirect", &self.redirect)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
