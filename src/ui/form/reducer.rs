//! Reducer for the summarization form.

use crate::api::ExchangeOutcome;
use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormState, FormStatus, FAILED_MESSAGE};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::InputChanged { text } => FormState { text, ..state },

            FormIntent::ModeChanged { mode } => FormState { mode, ..state },

            FormIntent::LengthChanged { raw } => FormState {
                length_input: raw,
                ..state
            },

            FormIntent::Rejected { error } => {
                if state.is_loading() {
                    return state;
                }
                FormState {
                    status: FormStatus::Error {
                        message: error.to_string(),
                    },
                    ..state
                }
            }

            FormIntent::Started { mode } => {
                if state.is_loading() {
                    return state;
                }
                FormState {
                    status: FormStatus::Loading { mode },
                    ..state
                }
            }

            FormIntent::Completed { outcome } => {
                // Stale completions (no request outstanding) are dropped.
                let FormStatus::Loading { mode } = &state.status else {
                    return state;
                };
                let mode = *mode;
                let status = match outcome {
                    ExchangeOutcome::Summary(summary) => FormStatus::Success { summary, mode },
                    ExchangeOutcome::Rejected(message) => FormStatus::Error { message },
                    ExchangeOutcome::Failed => FormStatus::Error {
                        message: FAILED_MESSAGE.to_string(),
                    },
                };
                FormState { status, ..state }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Mode;
    use crate::ui::form::validation::ValidationError;

    fn loading(mode: Mode) -> FormState {
        FormState {
            text: "Hello world".into(),
            mode,
            status: FormStatus::Loading { mode },
            ..FormState::default()
        }
    }

    #[test]
    fn mode_change_leaves_status_alone() {
        let state = FormState {
            status: FormStatus::Error {
                message: "x".into(),
            },
            ..FormState::default()
        };
        let next = FormReducer::reduce(
            state,
            FormIntent::ModeChanged {
                mode: Mode::Extractive,
            },
        );
        assert_eq!(next.mode, Mode::Extractive);
        assert!(matches!(next.status, FormStatus::Error { .. }));
    }

    #[test]
    fn rejection_shows_validation_message() {
        let next = FormReducer::reduce(
            FormState::default(),
            FormIntent::Rejected {
                error: ValidationError::Empty,
            },
        );
        assert_eq!(
            next.status,
            FormStatus::Error {
                message: "Please enter some text to summarize.".into()
            }
        );
        assert!(next.submit_enabled());
    }

    #[test]
    fn start_enters_loading() {
        let next = FormReducer::reduce(
            FormState::default(),
            FormIntent::Started {
                mode: Mode::Abstractive,
            },
        );
        assert!(next.is_loading());
        assert!(!next.submit_enabled());
    }

    #[test]
    fn summary_uses_mode_captured_at_submission() {
        let mut state = loading(Mode::Extractive);
        state = FormReducer::reduce(
            state,
            FormIntent::ModeChanged {
                mode: Mode::Abstractive,
            },
        );
        let next = FormReducer::reduce(
            state,
            FormIntent::Completed {
                outcome: ExchangeOutcome::Summary("Hello.".into()),
            },
        );
        assert_eq!(
            next.status,
            FormStatus::Success {
                summary: "Hello.".into(),
                mode: Mode::Extractive
            }
        );
        assert!(next.submit_enabled());
    }

    #[test]
    fn server_rejection_is_shown_verbatim() {
        let next = FormReducer::reduce(
            loading(Mode::Abstractive),
            FormIntent::Completed {
                outcome: ExchangeOutcome::Rejected("Text too short".into()),
            },
        );
        assert_eq!(
            next.status,
            FormStatus::Error {
                message: "Text too short".into()
            }
        );
    }

    #[test]
    fn failure_shows_generic_message_and_reenables() {
        let next = FormReducer::reduce(
            loading(Mode::Abstractive),
            FormIntent::Completed {
                outcome: ExchangeOutcome::Failed,
            },
        );
        assert_eq!(
            next.status,
            FormStatus::Error {
                message: FAILED_MESSAGE.into()
            }
        );
        assert_eq!(next.submit_label(), "Summarize");
    }

    #[test]
    fn stale_completion_is_ignored() {
        let next = FormReducer::reduce(
            FormState::default(),
            FormIntent::Completed {
                outcome: ExchangeOutcome::Summary("late".into()),
            },
        );
        assert_eq!(next.status, FormStatus::Idle);
    }

    #[test]
    fn second_start_while_loading_keeps_first_mode() {
        let next = FormReducer::reduce(
            loading(Mode::Extractive),
            FormIntent::Started {
                mode: Mode::Abstractive,
            },
        );
        assert_eq!(
            next.status,
            FormStatus::Loading {
                mode: Mode::Extractive
            }
        );
    }

    #[test]
    fn typing_while_loading_is_allowed() {
        let next = FormReducer::reduce(
            loading(Mode::Abstractive),
            FormIntent::InputChanged {
                text: "more".into(),
            },
        );
        assert_eq!(next.text, "more");
        assert!(next.is_loading());
    }
}
