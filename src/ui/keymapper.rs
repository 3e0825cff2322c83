//! Key mapping for session input
//!
//! Converts crossterm key events to the raw input units the session engine
//! understands. Keys the engine has no use for (cursor movement, Tab, Esc,
//! function keys) map to nothing.

use bitflags::bitflags;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

bitflags! {
    /// Modifier keys
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        let mut result = Modifiers::empty();
        if mods.contains(KeyModifiers::SHIFT) {
            result |= Modifiers::SHIFT;
        }
        if mods.contains(KeyModifiers::CONTROL) {
            result |= Modifiers::CTRL;
        }
        if mods.contains(KeyModifiers::ALT) {
            result |= Modifiers::ALT;
        }
        result
    }
}

/// Key mapper for converting key events to input units
pub struct KeyMapper;

impl KeyMapper {
    /// Map a crossterm KeyEvent to an input unit
    pub fn map(event: &KeyEvent) -> Option<String> {
        let mods = Modifiers::from(event.modifiers);

        match event.code {
            KeyCode::Char(ch) => Self::map_char(ch, mods),
            KeyCode::Enter => Some("\r".to_string()),
            KeyCode::Backspace => Some("\x7f".to_string()),
            KeyCode::Up if mods.is_empty() => Some("\x1b[A".to_string()),
            KeyCode::Down if mods.is_empty() => Some("\x1b[B".to_string()),
            _ => None,
        }
    }

    /// Map a character with modifiers
    fn map_char(ch: char, mods: Modifiers) -> Option<String> {
        if mods.contains(Modifiers::ALT) {
            return None;
        }

        // Ctrl + letter = control character
        if mods.contains(Modifiers::CTRL) {
            if ch.is_ascii_alphabetic() {
                let ctrl_code = (ch.to_ascii_lowercase() as u8) - b'a' + 1;
                return Some((ctrl_code as char).to_string());
            }
            return None;
        }

        // Normal character
        Some(ch.to_string())
    }

    /// Whether the key is the host's quit chord (Ctrl+D)
    pub fn is_quit(event: &KeyEvent) -> bool {
        event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(event.code, KeyCode::Char('d') | KeyCode::Char('D'))
    }

    /// Whether the key is the clipboard paste chord (Ctrl+V)
    pub fn is_paste(event: &KeyEvent) -> bool {
        event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(event.code, KeyCode::Char('v') | KeyCode::Char('V'))
    }
}
