//! Owned view-state of the summarization form.

use crate::api::Mode;
use crate::ui::mvi::UiState;

use super::validation::MAX_CHARS;

/// Label of the submit control when it accepts input.
pub const SUBMIT_LABEL: &str = "Summarize";

/// Label of the submit control while a request is outstanding.
pub const SUBMIT_BUSY_LABEL: &str = "Summarizing...";

/// Shown for every transport or protocol failure.
pub const FAILED_MESSAGE: &str = "Failed to summarize. Please try again or check the server.";

/// What the output panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// One request is outstanding.
    Loading {
        /// Mode captured at submission; later selector changes don't affect the heading.
        mode: Mode,
    },

    Success { summary: String, mode: Mode },

    Error { message: String },
}

/// Everything needed to render the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    /// Untrimmed text area content.
    pub text: String,
    pub mode: Mode,
    /// Raw content of the length field; parsed only on submit.
    pub length_input: String,
    pub status: FormStatus,
}

impl UiState for FormState {}

impl FormState {
    pub fn new(mode: Mode, length: u32) -> Self {
        Self {
            mode,
            length_input: length.to_string(),
            ..Self::default()
        }
    }

    /// Character count shown by the counter (untrimmed).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Counter alert. Cosmetic only: typing is never blocked.
    pub fn over_limit(&self) -> bool {
        self.char_count() > MAX_CHARS
    }

    pub fn length_visible(&self) -> bool {
        self.mode.uses_length()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FormStatus::Loading { .. })
    }

    /// The submit control is disabled exactly while loading.
    pub fn submit_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
