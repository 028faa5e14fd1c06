// Key and button bindings. Pure so host tests can include them.

use inspect_core::gallery::LOCATIONS;
use inspect_core::{MouseButton, UiCommand};

/// DOM `MouseEvent.button` to the core's button model.
#[inline]
pub fn mouse_button_from_dom(button: i16) -> MouseButton {
    match button {
        0 => MouseButton::Primary,
        2 => MouseButton::Secondary,
        _ => MouseButton::Other,
    }
}

pub fn command_for_key(key: &str) -> Option<UiCommand> {
    match key {
        "Escape" | "Backspace" => Some(UiCommand::Back),
        "0" => Some(UiCommand::ShowLocation(String::new())),
        "x" | "X" => Some(UiCommand::ClearInspection),
        _ => {
            let digit = key.parse::<usize>().ok()?;
            LOCATIONS
                .get(digit.checked_sub(1)?)
                .map(|name| UiCommand::ShowLocation((*name).to_string()))
        }
    }
}
