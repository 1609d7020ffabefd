//! Pure mapping from form state to what the output area shows.

use super::state::{FormState, FormStatus};
use super::validation::MAX_CHARS;

/// Message shown while a request is outstanding.
pub const LOADING_MESSAGE: &str = "Processing your text...";

/// Rendered content of the output area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputView {
    /// Nothing to show yet.
    Hidden,
    Loading { message: &'static str },
    /// Summary split on newlines; each entry is one rendered line.
    Summary { heading: String, lines: Vec<String> },
    Error { text: String },
}

/// Character counter below the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub count: usize,
    pub over_limit: bool,
}

impl CharCounter {
    pub fn label(&self) -> String {
        format!("{} / {} characters", self.count, MAX_CHARS)
    }
}

pub fn render_counter(state: &FormState) -> CharCounter {
    CharCounter {
        count: state.char_count(),
        over_limit: state.over_limit(),
    }
}

pub fn render_output(state: &FormState) -> OutputView {
    match &state.status {
        FormStatus::Idle => OutputView::Hidden,
        FormStatus::Loading { .. } => OutputView::Loading {
            message: LOADING_MESSAGE,
        },
        FormStatus::Success { summary, mode } => OutputView::Summary {
            heading: format!("Summary ({} Mode):", mode.display_name()),
            lines: summary
                .split('\n')
                .map(|line| line.trim_end_matches('\r').to_string())
                .collect(),
        },
        FormStatus::Error { message } => OutputView::Error {
            text: format!("Error: {}", message),
        },
    }
}

impl OutputView {
    pub fn is_visible(&self) -> bool {
        !matches!(self, OutputView::Hidden)
    }

    /// Markup for an HTML `#output` container. Text is escaped.
    pub fn to_html(&self) -> String {
        use html_escape::encode_text;

        match self {
            OutputView::Hidden => String::new(),
            OutputView::Loading { message } => {
                format!(r#"<div class="loading">{}</div>"#, encode_text(message))
            }
            OutputView::Summary { heading, lines } => {
                let body = lines
                    .iter()
                    .map(|line| encode_text(line))
                    .collect::<Vec<_>>()
                    .join("<br>");
                format!(
                    r#"<h3>{}</h3><div class="summary">{}</div>"#,
                    encode_text(heading),
                    body
                )
            }
            OutputView::Error { text } => {
                format!(r#"<div class="error">{}</div>"#, encode_text(text))
            }
        }
    }
}
