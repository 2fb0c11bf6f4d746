//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Device list
    RefreshDevices,
    SelectNext,
    SelectPrev,

    // Message editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    SendMessage,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, input_mode: InputMode, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('u') | KeyCode::Char('r') => Some(UiEvent::RefreshDevices),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
            KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Enter => Some(UiEvent::SendMessage),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}
