use crate::api::{ExchangeOutcome, SummarizeRequest};
use crate::config::FormDefaults;
use crate::ui::form::{FormController, FormState};

/// Widest length value accepted by the length field.
const MAX_LENGTH_DIGITS: usize = 4;

/// Focusable form controls, in tab order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Text,
    Mode,
    Length,
    Submit,
}

impl Focus {
    /// Next control in tab order, skipping the hidden length field.
    pub fn next(self, length_visible: bool) -> Focus {
        match self {
            Focus::Text => Focus::Mode,
            Focus::Mode if length_visible => Focus::Length,
            Focus::Mode | Focus::Length => Focus::Submit,
            Focus::Submit => Focus::Text,
        }
    }

    /// Previous control in tab order, skipping the hidden length field.
    pub fn prev(self, length_visible: bool) -> Focus {
        match self {
            Focus::Text => Focus::Submit,
            Focus::Mode => Focus::Text,
            Focus::Length => Focus::Mode,
            Focus::Submit if length_visible => Focus::Length,
            Focus::Submit => Focus::Mode,
        }
    }
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    form: FormController,
    endpoint: String,
    animation_tick: u8,
}

impl App {
    pub fn new(defaults: &FormDefaults, endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Text,
            form: FormController::new(FormState::new(defaults.mode, defaults.length)),
            endpoint: endpoint.into(),
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_tick(&mut self) {
        if self.form.state().is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.form.state().length_visible());
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev(self.form.state().length_visible());
    }

    /// Type a character into the focused text field.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            Focus::Text => {
                let mut text = self.form.state().text.clone();
                text.push(c);
                self.form.on_input_change(text);
            }
            Focus::Length => {
                let current = &self.form.state().length_input;
                if c.is_ascii_digit() && current.len() < MAX_LENGTH_DIGITS {
                    let mut raw = current.clone();
                    raw.push(c);
                    self.form.on_length_change(raw);
                }
            }
            Focus::Mode | Focus::Submit => {}
        }
    }

    /// Delete the last character of the focused text field.
    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Text => {
                let mut text = self.form.state().text.clone();
                if text.pop().is_some() {
                    self.form.on_input_change(text);
                }
            }
            Focus::Length => {
                let mut raw = self.form.state().length_input.clone();
                if raw.pop().is_some() {
                    self.form.on_length_change(raw);
                }
            }
            Focus::Mode | Focus::Submit => {}
        }
    }

    /// Append pasted text to the focused field.
    pub fn on_paste(&mut self, pasted: &str) {
        match self.focus {
            Focus::Text => {
                let mut text = self.form.state().text.clone();
                text.push_str(&pasted.replace("\r\n", "\n").replace('\r', "\n"));
                self.form.on_input_change(text);
            }
            Focus::Length => {
                for c in pasted.chars() {
                    self.insert_char(c);
                }
            }
            Focus::Mode | Focus::Submit => {}
        }
    }

    /// Flip the mode selector. Focus leaves the length field if it hides.
    pub fn toggle_mode(&mut self) {
        let mode = self.form.state().mode.toggled();
        self.form.on_mode_change(mode);
        if self.focus == Focus::Length && !mode.uses_length() {
            self.focus = Focus::Mode;
        }
    }

    /// Submit the form. Returns the request to send, if one was issued.
    pub fn submit(&mut self) -> Option<SummarizeRequest> {
        let request = self.form.on_submit();
        if request.is_some() {
            self.animation_tick = 0;
        }
        request
    }

    pub fn on_exchange_complete(&mut self, outcome: ExchangeOutcome) {
        self.form.on_complete(outcome);
    }
}
