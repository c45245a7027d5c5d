//! Key bindings
//!
//! Keys are written as strings ("j", "down", "ctrl+c") and parsed once when
//! the keymap is built.

use crate::command_id::CommandId;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct KeyCombo {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyCombo {
    fn parse(key: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut parts: Vec<&str> = key.split('+').collect();
        let name = parts.pop()?;

        for modifier in parts {
            match modifier {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match name {
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "pagedown" => KeyCode::PageDown,
            "pageup" => KeyCode::PageUp,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        // Shift is implied by the character itself for printable keys
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        self.code == key.code && self.modifiers == modifiers
    }
}

/// A single key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    combo: KeyCombo,
    /// Label shown to the user, e.g. "Ctrl+C"
    pub label: &'static str,
    pub command: CommandId,
}

impl KeyBinding {
    /// Create a binding; returns `None` if `key` does not parse
    pub fn new(key: &str, label: &'static str, command: CommandId) -> Option<Self> {
        let combo = KeyCombo::parse(key)?;
        Some(Self {
            combo,
            label,
            command,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    /// Command bound to `key`, first match wins
    pub fn match_key(&self, key: &KeyEvent) -> Option<CommandId> {
        self.bindings
            .iter()
            .find(|binding| binding.combo.matches(key))
            .map(|binding| binding.command)
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }
}

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = [
        // Navigation
        ("j", "j", NavigateNext),
        ("down", "↓", NavigateNext),
        ("k", "k", NavigatePrevious),
        ("up", "↑", NavigatePrevious),
        // Pull requests
        ("enter", "Enter", PrOpen),
        ("r", "r", ReviewRun),
        // Scrolling
        ("J", "J", DiffScrollDown),
        ("K", "K", DiffScrollUp),
        ("pagedown", "PgDn", DiffPageDown),
        ("pageup", "PgUp", DiffPageUp),
        ("]", "]", ReviewScrollDown),
        ("[", "[", ReviewScrollUp),
        // General
        ("q", "q", GlobalClose),
        ("esc", "Esc", GlobalClose),
        ("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(
        bindings
            .into_iter()
            .filter_map(|(key, label, command)| KeyBinding::new(key, label, command))
            .collect(),
    )
}
