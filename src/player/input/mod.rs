//! Input binding for the terminal player.
//!
//! Maps key events to navigation actions and applies them to a player.

mod keyboard;

pub use keyboard::{parse_key, KeyBinding, KeyParseError};

use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::trace;

use super::machine::Player;
use super::render::Renderer;
use super::timer::Clock;
use super::PlayerError;
use crate::config::KeysConfig;

/// What a key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    /// Like `Next`, but also fires while the key is held down
    Skip,
    Prev,
    Stop,
    Reset,
    Quit,
}

impl Action {
    /// Whether a key event of this kind triggers the action.
    pub fn accepts(self, kind: KeyEventKind) -> bool {
        match self {
            Action::Skip => matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat),
            _ => kind == KeyEventKind::Press,
        }
    }
}

/// Key bindings for every action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBindings {
    pub next: Vec<KeyBinding>,
    pub skip: Vec<KeyBinding>,
    pub prev: Vec<KeyBinding>,
    pub stop: Vec<KeyBinding>,
    pub reset: Vec<KeyBinding>,
    pub quit: Vec<KeyBinding>,
}

fn parse_all(names: &[String]) -> Result<Vec<KeyBinding>, KeyParseError> {
    names.iter().map(|name| parse_key(name)).collect()
}

impl TryFrom<&KeysConfig> for KeyBindings {
    type Error = KeyParseError;

    fn try_from(keys: &KeysConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            next: parse_all(&keys.next)?,
            skip: parse_all(&keys.skip)?,
            prev: parse_all(&keys.prev)?,
            stop: parse_all(&keys.stop)?,
            reset: parse_all(&keys.reset)?,
            quit: parse_all(&keys.quit)?,
        })
    }
}

impl KeyBindings {
    /// Bindings in matching order; quit wins over everything else.
    fn ordered(&self) -> [(Action, &[KeyBinding]); 6] {
        [
            (Action::Quit, self.quit.as_slice()),
            (Action::Next, self.next.as_slice()),
            (Action::Skip, self.skip.as_slice()),
            (Action::Prev, self.prev.as_slice()),
            (Action::Stop, self.stop.as_slice()),
            (Action::Reset, self.reset.as_slice()),
        ]
    }

    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.ordered()
            .into_iter()
            .find(|(action, bindings)| {
                action.accepts(key.kind) && bindings.iter().any(|b| b.matches(key))
            })
            .map(|(action, _)| action)
    }
}

/// Apply a navigation action. `Quit` is left to the caller.
pub fn dispatch<R: Renderer, C: Clock>(
    action: Action,
    player: &mut Player<R, C>,
) -> Result<(), PlayerError> {
    trace!(?action, index = player.index(), "Dispatching action");
    match action {
        Action::Next | Action::Skip => player.next(),
        Action::Prev => {
            player.prev()?;
            player.stop();
            Ok(())
        }
        Action::Stop => {
            player.stop();
            Ok(())
        }
        Action::Reset => player.reset(),
        Action::Quit => Ok(()),
    }
}
