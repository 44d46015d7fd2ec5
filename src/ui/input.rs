use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Navigation commands a key press can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Previous,
    Next,
    Quit,
}

/// Maps a key event to an action without touching any state.
pub fn classify_key(key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Left | KeyCode::Char('h') => InputAction::Previous,
        KeyCode::Right | KeyCode::Char('l') => InputAction::Next,
        _ => InputAction::None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    let action = classify_key(key);
    match action {
        InputAction::Quit => app.request_quit(),
        InputAction::Previous => app.show_previous(),
        InputAction::Next => app.show_next(),
        InputAction::None => {}
    }
    action
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
