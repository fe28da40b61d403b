//! Platform abstraction layer
//!
//! Translates browser input into simulation commands:
//! - Pointer position (vertical axis only) for the player paddle
//! - Key codes for pause
//! - Range input values for the preference sliders

use crate::settings::clamp_setting;
use crate::sim::Command;

/// Key code that toggles pause
pub const PAUSE_KEY: &str = "Space";

/// Pointer y relative to the playfield's top edge
#[inline]
pub fn pointer_to_field_y(client_y: f64, rect_top: f64) -> f32 {
    (client_y - rect_top) as f32
}

/// Command for a pointer move at `client_y` over a playfield whose top edge
/// is at `rect_top` in client coordinates
pub fn pointer_command(client_y: f64, rect_top: f64) -> Command {
    Command::PointerMoved {
        y: pointer_to_field_y(client_y, rect_top),
    }
}

/// Command bound to a `KeyboardEvent.code`, if any
pub fn key_command(code: &str) -> Option<Command> {
    match code {
        PAUSE_KEY => Some(Command::TogglePause),
        _ => None,
    }
}

/// Parse a range input's value into a preference in [1, 10]
pub fn parse_slider(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(clamp_setting)
}
