use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// User actions from keyboard events.
///
/// The mapping is phase-agnostic; [`super::app::App`] interprets each action
/// for the screen it is on (e.g. `Input` feeds the login field on the gate
/// and the search query while browsing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Escape,
    MoveUp,
    MoveDown,
    Submit,
    Input(char),
    Backspace,
    ToggleTheme,
    Logout,
    CopyUrl,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Escape,

        // Navigation (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,

        // Actions
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => Action::ToggleTheme,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::Logout,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyUrl,

        // Text input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }
        (KeyCode::Backspace, _) => Action::Backspace,

        _ => Action::None,
    }
}
