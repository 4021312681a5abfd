//! Keyboard mapping
//!
//! Anything not listed maps to `None` and never reaches the sim.

use crate::sim::Key;

/// Map a DOM `keyCode` to a game key
pub fn key_from_code(code: u32) -> Option<Key> {
    match code {
        32 => Some(Key::Confirm),
        37 => Some(Key::Left),
        38 => Some(Key::Up),
        39 => Some(Key::Right),
        40 => Some(Key::Down),
        _ => None,
    }
}

/// Map a DOM `KeyboardEvent.key` name, for hosts that don't expose key codes
pub fn key_from_name(name: &str) -> Option<Key> {
    match name {
        " " | "Spacebar" => Some(Key::Confirm),
        "ArrowLeft" | "Left" => Some(Key::Left),
        "ArrowUp" | "Up" => Some(Key::Up),
        "ArrowRight" | "Right" => Some(Key::Right),
        "ArrowDown" | "Down" => Some(Key::Down),
        _ => None,
    }
}
