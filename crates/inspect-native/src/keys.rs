use inspect_core::gallery::LOCATIONS;
use inspect_core::UiCommand;
use winit::keyboard::KeyCode;

/// Keyboard stand-ins for the panel buttons.
pub fn command_for_key(code: KeyCode) -> Option<UiCommand> {
    let location = |i: usize| Some(UiCommand::ShowLocation(LOCATIONS[i].to_string()));
    match code {
        KeyCode::Escape | KeyCode::Backspace => Some(UiCommand::Back),
        KeyCode::KeyX => Some(UiCommand::ClearInspection),
        KeyCode::Digit0 => Some(UiCommand::ShowLocation(String::new())),
        KeyCode::Digit1 => location(0),
        KeyCode::Digit2 => location(1),
        KeyCode::Digit3 => location(2),
        _ => None,
    }
}
