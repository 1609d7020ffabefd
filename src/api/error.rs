//! Transport and protocol failures of a summarization exchange.

use thiserror::Error;

/// Everything that turns into the generic "Failed to summarize" message.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Server answered with a non-2xx status; the body is ignored.
    #[error("Server error: {status}")]
    Status { status: u16 },

    /// Request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Body was not valid JSON.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// JSON was valid but not an object, e.g. an array or a bare string.
    #[error("Response body is not a JSON object")]
    NotAnObject,

    /// JSON carried neither an error nor a summary.
    #[error("Response contained neither 'summary' nor 'error'")]
    MissingSummary,
}

impl ExchangeError {
    /// Short category name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ExchangeError::Status { .. } => "status",
            ExchangeError::Network(_) => "network",
            ExchangeError::Decode(_) => "decode",
            ExchangeError::NotAnObject => "not_object",
            ExchangeError::MissingSummary => "missing_summary",
        }
    }
}
