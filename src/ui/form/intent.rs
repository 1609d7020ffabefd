//! Intents for the summarization form.

use crate::api::{ExchangeOutcome, Mode};
use crate::ui::mvi::Intent;

use super::validation::ValidationError;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Text area content changed.
    InputChanged { text: String },

    /// Mode selector changed.
    ModeChanged { mode: Mode },

    /// Length field content changed.
    LengthChanged { raw: String },

    /// Submission failed client-side validation.
    Rejected { error: ValidationError },

    /// A request was issued.
    Started { mode: Mode },

    /// The outstanding request finished.
    Completed { outcome: ExchangeOutcome },
}

impl Intent for FormIntent {}
