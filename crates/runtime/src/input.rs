//! Keyboard translation for the player actor.
//!
//! This module owns the key-event-to-direction step so the rest of the
//! runtime stays agnostic about concrete bindings or the specifics of
//! `crossterm` events. Device polling and the event loop live with the
//! embedding application; only already-polled events arrive here.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use game_content::ControlBindings;
use game_core::Actor;

/// Routes press/release events into the player's direction stack using a
/// configurable binding table.
pub struct InputHandler {
    bindings: ControlBindings,
}

impl InputHandler {
    pub fn new(bindings: ControlBindings) -> Self {
        Self { bindings }
    }

    /// Apply a key event to the player. Returns true when the event changed
    /// the player's held directions; unbound keys and repeats are ignored.
    pub fn handle_key(&self, key: KeyEvent, player: &mut Actor) -> bool {
        let Some(name) = key_name(key.code) else {
            return false;
        };
        let Some(direction) = self.bindings.direction(&name) else {
            return false;
        };
        match key.kind {
            KeyEventKind::Press => player.press(direction),
            KeyEventKind::Release => player.release(direction),
            KeyEventKind::Repeat => return false,
        }
        true
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(ControlBindings::default())
    }
}

/// Canonical lower-case name for a key, matching the binding files.
fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(ch) => Some(ch.to_ascii_lowercase().to_string()),
        KeyCode::Up => Some("up".to_owned()),
        KeyCode::Down => Some("down".to_owned()),
        KeyCode::Left => Some("left".to_owned()),
        KeyCode::Right => Some("right".to_owned()),
        _ => None,
    }
}
