//! Keyboard shortcuts handled by the app itself.

use winit::keyboard::KeyCode;

/// App-level actions bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePanel,
    ToggleFullscreen,
    Quit,
}

/// Map a pressed key to an app action.
///
/// `text_editing` is true while an egui widget holds keyboard focus. Tab
/// toggles the panel regardless, since egui-winit reports every Tab press as
/// consumed; letter and Escape keys are left to the focused widget.
pub fn key_action(key: KeyCode, text_editing: bool) -> Option<KeyAction> {
    match key {
        KeyCode::Tab => Some(KeyAction::TogglePanel),
        _ if text_editing => None,
        KeyCode::KeyF => Some(KeyAction::ToggleFullscreen),
        KeyCode::Escape => Some(KeyAction::Quit),
        // Space is reserved
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_keys() {
        assert_eq!(key_action(KeyCode::Tab, false), Some(KeyAction::TogglePanel));
        assert_eq!(
            key_action(KeyCode::KeyF, false),
            Some(KeyAction::ToggleFullscreen)
        );
        assert_eq!(key_action(KeyCode::Escape, false), Some(KeyAction::Quit));
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        assert_eq!(key_action(KeyCode::Space, false), None);
        assert_eq!(key_action(KeyCode::KeyA, false), None);
    }

    #[test]
    fn test_tab_toggles_while_widget_focused() {
        assert_eq!(key_action(KeyCode::Tab, true), Some(KeyAction::TogglePanel));
    }

    #[test]
    fn test_focused_widget_keeps_letters_and_escape() {
        assert_eq!(key_action(KeyCode::KeyF, true), None);
        assert_eq!(key_action(KeyCode::Escape, true), None);
    }
}
