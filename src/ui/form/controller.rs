//! Event handlers of the summarization form.

use crate::api::{ExchangeOutcome, Mode, SummarizeRequest};
use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::reducer::FormReducer;
use super::state::FormState;
use super::validation::build_request;
use super::view::{render_counter, render_output, CharCounter, OutputView};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Mediates between user input, validation, the exchange, and rendering.
///
/// The controller never performs I/O. [`on_submit`](Self::on_submit) hands
/// back the request to send; the caller reports the result through
/// [`on_complete`](Self::on_complete).
#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new(state: FormState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn on_input_change(&mut self, text: String) {
        dispatch_mvi!(self, state, FormReducer, FormIntent::InputChanged { text });
    }

    pub fn on_mode_change(&mut self, mode: Mode) {
        dispatch_mvi!(self, state, FormReducer, FormIntent::ModeChanged { mode });
    }

    pub fn on_length_change(&mut self, raw: String) {
        dispatch_mvi!(self, state, FormReducer, FormIntent::LengthChanged { raw });
    }

    /// Validate and, if accepted, enter loading.
    ///
    /// Returns the request to send, or `None` when validation failed or a
    /// request is already outstanding.
    pub fn on_submit(&mut self) -> Option<SummarizeRequest> {
        if self.state.is_loading() {
            tracing::debug!("Submit ignored while a request is outstanding");
            return None;
        }

        match build_request(&self.state.text, self.state.mode, &self.state.length_input) {
            Err(error) => {
                tracing::info!(reason = %error, "Submission rejected by validation");
                dispatch_mvi!(self, state, FormReducer, FormIntent::Rejected { error });
                None
            }
            Ok(request) => {
                tracing::info!(
                    mode = %request.mode,
                    length = ?request.length,
                    chars = request.text.chars().count(),
                    "Submitting text for summarization"
                );
                dispatch_mvi!(
                    self,
                    state,
                    FormReducer,
                    FormIntent::Started { mode: request.mode }
                );
                Some(request)
            }
        }
    }

    /// Leave loading with the exchange result.
    pub fn on_complete(&mut self, outcome: ExchangeOutcome) {
        let kind = match &outcome {
            ExchangeOutcome::Summary(_) => "summary",
            ExchangeOutcome::Rejected(_) => "rejected",
            ExchangeOutcome::Failed => "failed",
        };
        tracing::info!(outcome = kind, "Summarization finished");
        dispatch_mvi!(self, state, FormReducer, FormIntent::Completed { outcome });
    }

    pub fn output(&self) -> OutputView {
        render_output(&self.state)
    }

    pub fn counter(&self) -> CharCounter {
        render_counter(&self.state)
    }
}
