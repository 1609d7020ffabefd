//! Wire types for the summarization endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::ExchangeError;

/// Summarization strategy requested from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Select `length` existing sentences from the input.
    Extractive,
    /// Generate new phrasing; no length applies.
    #[default]
    Abstractive,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Extractive, Mode::Abstractive];

    /// Wire value (`"extractive"` / `"abstractive"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Extractive => "extractive",
            Mode::Abstractive => "abstractive",
        }
    }

    /// Name with the first letter capitalized, as used in the summary heading.
    pub fn display_name(self) -> &'static str {
        match self {
            Mode::Extractive => "Extractive",
            Mode::Abstractive => "Abstractive",
        }
    }

    /// Whether a length value is sent (and the length field shown).
    pub fn uses_length(self) -> bool {
        matches!(self, Mode::Extractive)
    }

    /// The other mode. The selector only has two entries.
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Extractive => Mode::Abstractive,
            Mode::Abstractive => Mode::Extractive,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid mode '{0}'. Use \"abstractive\" or \"extractive\".")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extractive" => Ok(Mode::Extractive),
            "abstractive" => Ok(Mode::Abstractive),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Request body for `POST /summarize`.
///
/// `length` serializes as `null` when absent; the server distinguishes a
/// missing key from an explicit null only for extractive requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub mode: Mode,
    pub length: Option<u32>,
}

/// Raw response body. Either field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizeResponse {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A well-formed answer from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryResult {
    Summary(String),
    /// Application-level rejection carried in the `error` field.
    Rejected(String),
}

impl SummarizeResponse {
    /// Decode a 2xx body. Only a JSON object is accepted; the derived
    /// deserializer would otherwise read `["x"]` as a positional struct.
    pub fn from_body(body: &str) -> Result<Self, ExchangeError> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(ExchangeError::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// A non-empty `error` wins; otherwise `summary` must be present.
    pub fn into_result(self) -> Result<SummaryResult, ExchangeError> {
        match (self.error, self.summary) {
            (Some(error), _) if !error.is_empty() => Ok(SummaryResult::Rejected(error)),
            (_, Some(summary)) => Ok(SummaryResult::Summary(summary)),
            _ => Err(ExchangeError::MissingSummary),
        }
    }
}

/// How one request/response exchange ended, as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    Summary(String),
    Rejected(String),
    /// Transport or protocol failure. Details are logged, not shown.
    Failed,
}

impl From<SummaryResult> for ExchangeOutcome {
    fn from(result: SummaryResult) -> Self {
        match result {
            SummaryResult::Summary(summary) => ExchangeOutcome::Summary(summary),
            SummaryResult::Rejected(message) => ExchangeOutcome::Rejected(message),
        }
    }
}
