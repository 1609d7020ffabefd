//! Client side of the `/summarize` HTTP contract.
//!
//! The remote endpoint is the only external collaborator: it receives
//! `{text, mode, length}` and answers with either `{summary}` or `{error}`.

mod client;
mod error;
mod types;

pub use client::{run_exchange, SummarizeClient, SUMMARIZE_PATH};
pub use error::ExchangeError;
pub use types::{
    ExchangeOutcome, Mode, ParseModeError, SummarizeRequest, SummarizeResponse, SummaryResult,
};
