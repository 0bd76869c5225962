//! Keyboard bindings.

use nannou::prelude::*;

/// Actions that can be triggered by key presses
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    TogglePlayback,
    /// New recipes and specials for the current window
    Regenerate,
}

pub fn parse_key(key: Key) -> Option<Action> {
    match key {
        Key::Q => Some(Action::Quit),
        Key::Space | Key::P => Some(Action::TogglePlayback),
        Key::R => Some(Action::Regenerate),
        _ => None,
    }
}
