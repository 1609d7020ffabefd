use crate::api::SummarizeRequest;
use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Send this request to the summarization endpoint.
    Send(SummarizeRequest),
}

impl From<Option<SummarizeRequest>> for InputAction {
    fn from(request: Option<SummarizeRequest>) -> Self {
        request.map_or(InputAction::None, InputAction::Send)
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return InputAction::None;
    }

    if is_ctrl_char(key, 's') {
        return app.submit().into();
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return InputAction::None;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return InputAction::None;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Text => match key.code {
            KeyCode::Enter => app.insert_char('\n'),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.insert_char(c)
            }
            _ => {}
        },
        Focus::Mode => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Char(' ') => {
                app.toggle_mode()
            }
            _ => {}
        },
        Focus::Length => match key.code {
            // Enter in a single-line field submits the form
            KeyCode::Enter => return app.submit().into(),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.insert_char(c)
            }
            _ => {}
        },
        Focus::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => return app.submit().into(),
            _ => {}
        },
    }

    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, target: char) -> bool {
    matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&target))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
