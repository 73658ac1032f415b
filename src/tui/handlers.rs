// File: src/tui/handlers.rs
// Maps keyboard input to actions for the TUI.
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &AppState) -> Option<Action> {
    // Ctrl-C always quits, whatever else is bound.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            // Esc first collapses the expanded help, then quits.
            if state.show_full_help && key.code == KeyCode::Esc {
                Some(Action::ToggleHelp)
            } else {
                Some(Action::Quit)
            }
        }
        KeyCode::Char('e') | KeyCode::Left => Some(Action::SelectEducation),
        KeyCode::Char('x') | KeyCode::Right => Some(Action::SelectExperience),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),
        KeyCode::Char('t') => Some(Action::CycleTheme),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}
