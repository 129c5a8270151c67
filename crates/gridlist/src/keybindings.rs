//! Keybindings configuration and matching.
//!
//! Bindings are strings such as `"j"`, `"ctrl+c"` or `"shift+tab"`, stored in
//! `{data_dir}/keybindings.yaml` and compared case-insensitively against the
//! string form of each key event.

use std::path::{Path, PathBuf};

use gridlist_core::Command;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::event::{AppKeyEvent, KeyCode};

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Cursor movement inside the list
    pub navigation: NavigationBindings,
    /// Commands that end or leave the list
    pub actions: ActionBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub page_up: Vec<String>,
    pub page_down: Vec<String>,
}

impl Default for NavigationBindings {
    fn default() -> Self {
        Self {
            up: vec!["k".into(), "up".into()],
            down: vec!["j".into(), "down".into()],
            left: vec!["h".into(), "left".into()],
            right: vec!["l".into(), "right".into()],
            page_up: vec!["pageup".into(), "ctrl+u".into()],
            page_down: vec!["pagedown".into(), "ctrl+d".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionBindings {
    pub confirm: Vec<String>,
    pub cancel: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self {
            confirm: vec!["enter".into(), "space".into()],
            cancel: vec!["esc".into(), "backspace".into()],
            quit: vec!["q".into(), "ctrl+c".into()],
        }
    }
}

impl KeybindingsConfig {
    /// Convert a key event to the binding string format.
    ///
    /// Examples:
    /// - `Char('a')` -> `"a"`
    /// - `Char('s')` with ctrl -> `"ctrl+s"`
    /// - `Char('J')` with shift -> `"shift+j"`
    /// - `BackTab` -> `"shift+tab"`
    ///
    /// Unsupported keys produce an empty string.
    pub fn key_to_string(key: &AppKeyEvent) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if key.ctrl {
            parts.push("ctrl");
        }
        if key.alt {
            parts.push("alt");
        }

        let name = match key.code {
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => {
                if key.shift && (c.is_uppercase() || !c.is_alphabetic()) {
                    parts.push("shift");
                }
                c.to_lowercase().to_string()
            }
            KeyCode::BackTab => {
                parts.push("shift");
                "tab".to_string()
            }
            code => {
                let name = match code {
                    KeyCode::Enter => "enter",
                    KeyCode::Tab => "tab",
                    KeyCode::Backspace => "backspace",
                    KeyCode::Delete => "delete",
                    KeyCode::Esc => "esc",
                    KeyCode::Up => "up",
                    KeyCode::Down => "down",
                    KeyCode::Left => "left",
                    KeyCode::Right => "right",
                    KeyCode::Home => "home",
                    KeyCode::End => "end",
                    KeyCode::PageUp => "pageup",
                    KeyCode::PageDown => "pagedown",
                    KeyCode::Insert => "insert",
                    KeyCode::F(n) => return Self::with_parts(parts, &format!("f{n}")),
                    _ => return String::new(),
                };
                if key.shift {
                    parts.push("shift");
                }
                name.to_string()
            }
        };

        Self::with_parts(parts, &name)
    }

    fn with_parts<'a>(mut parts: Vec<&'a str>, name: &'a str) -> String {
        parts.push(name);
        parts.join("+")
    }

    /// Check if a key event matches any of `bindings`.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    /// The list command bound to `key`, if any.
    pub fn command_for(&self, key: &AppKeyEvent) -> Option<Command> {
        let nav = &self.navigation;
        let actions = &self.actions;
        let table: [(&[String], Command); 8] = [
            (&nav.up, Command::Up),
            (&nav.down, Command::Down),
            (&nav.left, Command::Left),
            (&nav.right, Command::Right),
            (&nav.page_up, Command::PageUp),
            (&nav.page_down, Command::PageDown),
            (&actions.confirm, Command::Ok),
            (&actions.cancel, Command::Cancel),
        ];
        table
            .into_iter()
            .find(|(bindings, _)| Self::matches(key, bindings))
            .map(|(_, command)| command)
    }

    pub fn is_quit(&self, key: &AppKeyEvent) -> bool {
        Self::matches(key, &self.actions.quit)
    }

    /// First binding of each command, for the help line.
    pub fn hint(bindings: &[String]) -> &str {
        bindings.first().map(String::as_str).unwrap_or("-")
    }

    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("keybindings.yaml")
    }

    /// Load keybindings, falling back to defaults if the file is missing or invalid.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        let parsed = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(e.to_string()))
            .and_then(|content| {
                serde_saphyr::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            });
        match parsed {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "using default keybindings");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        let yaml = serde_saphyr::to_string(self).map_err(|e| {
            ConfigError::Serialize(format!("Failed to serialize keybindings: {e}"))
        })?;
        std::fs::write(Self::path(data_dir), yaml)
            .map_err(|e| ConfigError::Io(format!("Failed to write keybindings: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_to_string_basic() {
        let key = AppKeyEvent::new(KeyCode::Char('a'));
        assert_eq!(KeybindingsConfig::key_to_string(&key), "a");

        let key = AppKeyEvent::new(KeyCode::Char(' '));
        assert_eq!(KeybindingsConfig::key_to_string(&key), "space");
    }

    #[test]
    fn test_key_to_string_modifiers() {
        let key = AppKeyEvent::new(KeyCode::Char('c')).with_ctrl();
        assert_eq!(KeybindingsConfig::key_to_string(&key), "ctrl+c");

        let key = AppKeyEvent::new(KeyCode::Char('J')).with_shift();
        assert_eq!(KeybindingsConfig::key_to_string(&key), "shift+j");

        let key = AppKeyEvent::new(KeyCode::Down).with_shift();
        assert_eq!(KeybindingsConfig::key_to_string(&key), "shift+down");

        let key = AppKeyEvent::new(KeyCode::BackTab).with_shift();
        assert_eq!(KeybindingsConfig::key_to_string(&key), "shift+tab");
    }

    #[test]
    fn test_key_to_string_special() {
        let key = AppKeyEvent::new(KeyCode::PageDown);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "pagedown");

        let key = AppKeyEvent::new(KeyCode::F(5));
        assert_eq!(KeybindingsConfig::key_to_string(&key), "f5");

        let key = AppKeyEvent::new(KeyCode::Null);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "");
    }

    #[test]
    fn test_matches_case_insensitive() {
        let bindings = vec!["Ctrl+D".to_string(), "PageDown".to_string()];
        let key = AppKeyEvent::new(KeyCode::Char('d')).with_ctrl();
        assert!(KeybindingsConfig::matches(&key, &bindings));

        let key = AppKeyEvent::new(KeyCode::Char('d'));
        assert!(!KeybindingsConfig::matches(&key, &bindings));
    }

    #[test]
    fn test_command_for_defaults() {
        let config = KeybindingsConfig::default();
        let cases = [
            (AppKeyEvent::new(KeyCode::Char('j')), Some(Command::Down)),
            (AppKeyEvent::new(KeyCode::Up), Some(Command::Up)),
            (AppKeyEvent::new(KeyCode::PageUp), Some(Command::PageUp)),
            (AppKeyEvent::new(KeyCode::Enter), Some(Command::Ok)),
            (AppKeyEvent::new(KeyCode::Esc), Some(Command::Cancel)),
            (AppKeyEvent::new(KeyCode::Char('q')), None),
        ];
        for (key, expected) in cases {
            assert_eq!(config.command_for(&key), expected, "{key:?}");
        }
        assert!(config.is_quit(&AppKeyEvent::new(KeyCode::Char('q'))));
        assert!(config.is_quit(&AppKeyEvent::new(KeyCode::Char('c')).with_ctrl()));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            KeybindingsConfig::path(dir.path()),
            "navigation:\n  down: [\"s\"]\n",
        )
        .unwrap();

        let config = KeybindingsConfig::load_or_default(dir.path());
        assert_eq!(config.navigation.down, vec!["s".to_string()]);
        assert_eq!(config.navigation.up, NavigationBindings::default().up);
        assert_eq!(config.actions, ActionBindings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = KeybindingsConfig::default();
        config.actions.quit = vec!["ctrl+q".into()];
        config.save(dir.path()).unwrap();

        assert_eq!(KeybindingsConfig::load_or_default(dir.path()), config);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(KeybindingsConfig::path(dir.path()), "navigation: [").unwrap();
        assert_eq!(
            KeybindingsConfig::load_or_default(dir.path()),
            KeybindingsConfig::default()
        );
    }
}
