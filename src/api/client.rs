//! HTTP client for the summarization endpoint.

use std::time::{Duration, Instant};

use reqwest::Client;

use crate::config::ServerConfig;

use super::error::ExchangeError;
use super::types::{ExchangeOutcome, SummarizeRequest, SummarizeResponse, SummaryResult};

/// Path of the endpoint, relative to the configured base URL.
pub const SUMMARIZE_PATH: &str = "/summarize";

/// Client for `POST /summarize`.
///
/// One call is one attempt: failures are reported, never retried.
#[derive(Debug, Clone)]
pub struct SummarizeClient {
    client: Client,
    endpoint: String,
}

impl SummarizeClient {
    /// Build a client from server settings.
    ///
    /// No total request timeout is applied unless one is configured, so a
    /// hung server keeps the form loading until the transport gives up.
    pub fn new(config: &ServerConfig) -> Result<Self, ExchangeError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds));
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: endpoint_url(&config.base_url),
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform one exchange.
    ///
    /// Any non-2xx status is a failure regardless of body; a 2xx body must
    /// decode to `{summary}` or `{error}`.
    pub async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummaryResult, ExchangeError> {
        tracing::debug!(
            url = %self.endpoint,
            mode = %request.mode,
            length = ?request.length,
            chars = request.text.chars().count(),
            "Sending summarization request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            tracing::warn!(status = %status, latency_ms, "Summarization endpoint returned error status");
            return Err(ExchangeError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed = SummarizeResponse::from_body(&body)?;

        tracing::debug!(status = %status, latency_ms, "Summarization response received");
        parsed.into_result()
    }
}

/// Run one exchange and fold the result into what the form needs.
///
/// The underlying error is logged here; the form only learns that the
/// exchange failed.
pub async fn run_exchange(client: &SummarizeClient, request: &SummarizeRequest) -> ExchangeOutcome {
    match client.summarize(request).await {
        Ok(result) => ExchangeOutcome::from(result),
        Err(err) => {
            tracing::error!(kind = err.kind(), error = %err, "Summarization request failed");
            ExchangeOutcome::Failed
        }
    }
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SUMMARIZE_PATH)
}
