//! # Rates Client
//!
//! A typed Rust client for the public exchange-rate API
//! (`GET {base_url}/latest/{BASE}`), implementing the `RateProvider` port.

use std::error::Error as StdError;
use std::time::Duration;

use async_trait::async_trait;
use converter_types::{RateError, RateProvider, RateTable};
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.exchangerate-api.com/v4";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest error body kept in a `RateError::Status` message, in characters.
const MAX_ERROR_BODY: usize = 512;

/// Error type for client construction.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Timeout must be greater than zero")]
    ZeroTimeout,
}

/// Exchange-rate API client.
pub struct RatesClient {
    base_url: String,
    timeout: Duration,
    http: Client,
}

impl RatesClient {
    /// Creates a client for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client whose requests give up after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        if timeout.is_zero() {
            return Err(ClientError::ZeroTimeout);
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// URL of the "latest rates" endpoint for `base`.
    pub fn latest_url(&self, base: &str) -> String {
        format!("{}/latest/{}", self.base_url, base)
    }

    /// Fetches the latest rates for `base`.
    pub async fn fetch_latest(&self, base: &str) -> Result<RateTable, RateError> {
        let url = self.latest_url(base);
        tracing::debug!(%url, "fetching rates");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.handle_response(resp).await
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<RateTable, RateError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await.map_err(|e| self.transport_error(e))?;
            serde_json::from_str(&body).map_err(|e| RateError::Malformed(e.to_string()))
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .or_else(|| v.get("error-type"))
                        .and_then(|e| e.as_str())
                        .map(String::from)
                })
                .unwrap_or(body);
            let message = truncate(message.trim(), MAX_ERROR_BODY);
            tracing::warn!(status = status.as_u16(), %message, "rate service rejected request");
            Err(RateError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> RateError {
        let detail = error_chain(&err);
        tracing::warn!(error = %detail, "rate request failed");
        if err.is_timeout() {
            RateError::Timeout(format!("no response within {:?}: {}", self.timeout, detail))
        } else {
            RateError::Transport(detail)
        }
    }
}

#[async_trait]
impl RateProvider for RatesClient {
    async fn latest(&self, base: &str) -> Result<RateTable, RateError> {
        self.fetch_latest(base).await
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

/// Joins an error and all of its sources into one line.
///
/// `reqwest` keeps the interesting part (refused connection, DNS failure)
/// in the source chain rather than in its own message.
fn error_chain(err: &dyn StdError) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
