//! Client-side checks run before any request is issued.

use thiserror::Error;

use crate::api::{Mode, SummarizeRequest};

/// Hard limit on trimmed input, also the counter's alert threshold.
pub const MAX_CHARS: usize = 2000;

/// Sentence count sent when the length field is empty or unparsable.
pub const DEFAULT_LENGTH: u32 = 3;

/// Input rejected before reaching the network. First failure wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some text to summarize.")]
    Empty,

    #[error("Text exceeds 2000 characters. Please shorten it.")]
    TooLong { chars: usize },
}

/// Whitespace for trimming purposes. Includes the byte order mark, which
/// `char::is_whitespace` does not.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Trim `text` and check it against the empty and length rules.
pub fn validate_text(text: &str) -> Result<&str, ValidationError> {
    let trimmed = text.trim_matches(is_blank);
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let chars = trimmed.chars().count();
    if chars > MAX_CHARS {
        return Err(ValidationError::TooLong { chars });
    }

    Ok(trimmed)
}

/// Read the length field the way an integer prefix parse would.
///
/// Leading whitespace and a `+` sign are skipped, then the leading digits
/// are read (`"4 sentences"` is 4). Anything that yields no positive number
/// falls back to [`DEFAULT_LENGTH`].
pub fn parse_length(raw: &str) -> u32 {
    let rest = raw.trim_start_matches(is_blank);
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    rest[..end]
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_LENGTH)
}

/// Build the request body, or the first validation failure.
///
/// `length` is only populated for extractive mode.
pub fn build_request(
    text: &str,
    mode: Mode,
    length_input: &str,
) -> Result<SummarizeRequest, ValidationError> {
    let text = validate_text(text)?;
    let length = mode.uses_length().then(|| parse_length(length_input));

    Ok(SummarizeRequest {
        text: text.to_string(),
        mode,
        length,
    })
}
