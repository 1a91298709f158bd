use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    /// "vim" (j/k plus arrows) or "arrows" (arrows only).
    pub profile: String,
    /// Extra bindings, key → action name, e.g. `"x" = "roll"`.
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
            custom: None,
        }
    }
}

/// Key bindings for the main screen. Modal screens (editor, confirm, help)
/// have fixed keys handled in `input`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub normal: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut normal = HashMap::new();

        normal.insert(key('q'), Action::Quit);
        normal.insert(key(KeyCode::Down), Action::SelectNext);
        normal.insert(key(KeyCode::Up), Action::SelectPrev);
        if config.profile != "arrows" {
            normal.insert(key('j'), Action::SelectNext);
            normal.insert(key('k'), Action::SelectPrev);
        }
        normal.insert(key(' '), Action::Roll);
        normal.insert(key(KeyCode::Enter), Action::Roll);
        normal.insert(key('r'), Action::Roll);
        normal.insert(key('n'), Action::OpenCreateEditor);
        normal.insert(key('e'), Action::OpenEditEditor);
        normal.insert(key('h'), Action::ToggleHistory);
        normal.insert(key('c'), Action::ClearHistoryIntent);
        normal.insert(key('?'), Action::ToggleHelp);
        normal.insert(key(KeyCode::Esc), Action::CancelMode);
        for (i, digit) in ('1'..='9').enumerate() {
            normal.insert(key(digit), Action::SwitchList(i));
        }

        if let Some(custom) = &config.custom {
            for (key_name, action_name) in custom {
                match (parse_key(key_name), parse_action(action_name)) {
                    (Some(k), Some(action)) => {
                        normal.insert(k, action);
                    }
                    _ => tracing::warn!(key = %key_name, action = %action_name, "ignoring invalid key binding"),
                }
            }
        }

        Self { normal }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.normal.get(&normalize(event)).cloned()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

trait IntoKeyCode {
    fn into_key_code(self) -> KeyCode;
}

impl IntoKeyCode for char {
    fn into_key_code(self) -> KeyCode {
        KeyCode::Char(self)
    }
}

impl IntoKeyCode for KeyCode {
    fn into_key_code(self) -> KeyCode {
        self
    }
}

fn key(code: impl IntoKeyCode) -> KeyEvent {
    KeyEvent::new(code.into_key_code(), KeyModifiers::empty())
}

// Terminals disagree on whether an uppercase char also carries SHIFT.
fn normalize(event: KeyEvent) -> KeyEvent {
    let modifiers = match event.code {
        KeyCode::Char(_) => event.modifiers - KeyModifiers::SHIFT,
        _ => event.modifiers,
    };
    KeyEvent::new(event.code, modifiers)
}

/// Parses names like `x`, `space`, `enter`, `ctrl+r`.
pub fn parse_key(name: &str) -> Option<KeyEvent> {
    let lower = name.trim().to_lowercase();
    let (modifiers, rest) = match lower.strip_prefix("ctrl+") {
        Some(rest) => (KeyModifiers::CONTROL, rest),
        None => match lower.strip_prefix("alt+") {
            Some(rest) => (KeyModifiers::ALT, rest),
            None => (KeyModifiers::empty(), lower.as_str()),
        },
    };
    let code = match rest {
        "space" => KeyCode::Char(' '),
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" => KeyCode::Esc,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        _ => {
            // Keep the original case for single characters.
            let original = name.trim();
            let ch = original.chars().last()?;
            if rest.chars().count() != 1 {
                return None;
            }
            KeyCode::Char(ch)
        }
    };
    Some(KeyEvent::new(code, modifiers))
}

pub fn parse_action(name: &str) -> Option<Action> {
    match name.trim() {
        "quit" => Some(Action::Quit),
        "next" => Some(Action::SelectNext),
        "prev" => Some(Action::SelectPrev),
        "roll" => Some(Action::Roll),
        "create" => Some(Action::OpenCreateEditor),
        "edit" => Some(Action::OpenEditEditor),
        "toggle-history" => Some(Action::ToggleHistory),
        "clear-history" => Some(Action::ClearHistoryIntent),
        "help" => Some(Action::ToggleHelp),
        _ => None,
    }
}
