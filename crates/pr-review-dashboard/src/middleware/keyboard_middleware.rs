//! KeyboardMiddleware - translates key presses into semantic actions
//!
//! Intercepts `GlobalAction::KeyPressed` and looks the key up in the keymap
//! held by the state. Matched keys dispatch the command's action; the raw key
//! press never reaches the reducer.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        if let Some(command) = state.keymap.match_key(key) {
            log::debug!("Keymap matched command: {:?}", command);
            dispatcher.dispatch(command.to_action());
        }

        // Unhandled keys are consumed (not passed through)
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ReviewAction;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            code,
            KeyModifiers::NONE,
        )))
    }

    #[test]
    fn test_key_is_translated_and_consumed() {
        let mut middleware = KeyboardMiddleware::new();
        let dispatcher = Dispatcher::new();
        let state = AppState::default();

        assert!(!middleware.handle(&press(KeyCode::Char('r')), &state, &dispatcher));
        assert!(matches!(
            dispatcher.pop(),
            Some(Action::Review(ReviewAction::Run))
        ));
    }

    #[test]
    fn test_unbound_key_dispatches_nothing() {
        let mut middleware = KeyboardMiddleware::new();
        let dispatcher = Dispatcher::new();
        let state = AppState::default();

        assert!(!middleware.handle(&press(KeyCode::Char('x')), &state, &dispatcher));
        assert!(dispatcher.is_empty());
    }

    #[test]
    fn test_other_actions_pass_through() {
        let mut middleware = KeyboardMiddleware::new();
        let dispatcher = Dispatcher::new();
        let state = AppState::default();

        assert!(middleware.handle(&Action::Global(GlobalAction::Quit), &state, &dispatcher));
    }
}
