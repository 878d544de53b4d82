//! Event handler for processing input events.

use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::Action;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    /// How long to wait for input before emitting a tick.
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(keybindings: KeyBindings, tick_rate: Duration) -> Self {
        Self {
            keybindings,
            tick_rate,
        }
    }

    /// Get the next action from user input, or [`Action::Tick`] if the tick
    /// rate elapses without input.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => return Ok(self.handle_key(key)),
                CrosstermEvent::Resize(_, _) => {
                    // Terminal will automatically redraw
                }
                _ => {}
            }
            return Ok(None);
        }
        Ok(Some(Action::Tick))
    }

    /// Handle a key event and return an optional action.
    pub fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if matches_binding(key, &self.keybindings.quit) || key.code == KeyCode::Esc {
            return Some(Action::Quit);
        }

        if matches_binding(key, &self.keybindings.help) {
            return Some(Action::ToggleHelp);
        }

        if matches_binding(key, &self.keybindings.refresh) {
            return Some(Action::RefreshAll);
        }

        None
    }
}

/// Check a key against a binding string such as `"q"`, `"F5"` or `"Enter"`.
fn matches_binding(key: KeyEvent, binding: &str) -> bool {
    match binding.to_lowercase().as_str() {
        "enter" => key.code == KeyCode::Enter,
        "esc" | "escape" => key.code == KeyCode::Esc,
        "space" => key.code == KeyCode::Char(' '),
        "tab" => key.code == KeyCode::Tab,
        s if s.len() > 1 && s.starts_with('f') => s[1..]
            .parse::<u8>()
            .map(|n| key.code == KeyCode::F(n))
            .unwrap_or(false),
        _ => {
            let mut chars = binding.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => match key.code {
                    KeyCode::Char(pressed) => pressed.eq_ignore_ascii_case(&c),
                    _ => false,
                },
                _ => false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn handler() -> EventHandler {
        EventHandler::new(KeyBindings::default(), Duration::from_millis(250))
    }

    #[test]
    fn test_default_bindings() {
        let handler = handler();
        assert!(matches!(handler.handle_key(press(KeyCode::Char('q'))), Some(Action::Quit)));
        assert!(matches!(handler.handle_key(press(KeyCode::Char('Q'))), Some(Action::Quit)));
        assert!(matches!(handler.handle_key(press(KeyCode::Esc)), Some(Action::Quit)));
        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('r'))),
            Some(Action::RefreshAll)
        ));
        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('?'))),
            Some(Action::ToggleHelp)
        ));
        assert!(handler.handle_key(press(KeyCode::Char('x'))).is_none());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(handler().handle_key(key), Some(Action::Quit)));
    }

    #[test]
    fn test_release_events_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(handler().handle_key(key).is_none());
    }

    #[test]
    fn test_custom_bindings() {
        let handler = EventHandler::new(
            KeyBindings {
                quit: "x".to_string(),
                refresh: "F5".to_string(),
                help: "h".to_string(),
            },
            Duration::from_millis(100),
        );

        assert!(matches!(handler.handle_key(press(KeyCode::F(5))), Some(Action::RefreshAll)));
        assert!(matches!(handler.handle_key(press(KeyCode::Char('x'))), Some(Action::Quit)));
        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('h'))),
            Some(Action::ToggleHelp)
        ));
        assert!(handler.handle_key(press(KeyCode::Char('r'))).is_none());
    }
}
