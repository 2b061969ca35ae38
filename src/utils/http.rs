//! HTTP client utilities.

use encoding_rs::WINDOWS_1252;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;

use crate::config::TriageConfig;

/// Errors from a single fetch attempt.
///
/// Only the network side can fail; body decoding always yields a string.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Network-level error (DNS, connect, timeout, body read)
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("server returned status {0}")]
    Status(StatusCode),

    /// Client could not be constructed
    #[error("client setup failed: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

/// Shared HTTP client carrying the configured user agent and timeout
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Arc<Client>,
}

impl HttpClient {
    /// Create a client from the application configuration
    pub fn new(config: &TriageConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(&config.scraping.user_agent)
            .timeout(Duration::from_secs(config.processing.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| FetchError::Setup(e.to_string()))?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Get the underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Perform exactly one GET against `url` and decode the body.
    ///
    /// Non-success statuses are fetch failures; the router treats them as
    /// "this candidate failed" and moves on.
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let bytes = response.bytes().await?;
        Ok(decode_body(&bytes))
    }
}

/// Decode response bytes with a fixed fallback chain: strict UTF-8, then
/// windows-1252 (the WHATWG superset covering the Latin-1 and CP1252
/// labels), then lossy UTF-8. Never fails.
fn decode_body(bytes: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let (decoded, _, had_errors) = WINDOWS_1252.decode(bytes);
    if !had_errors {
        return decoded.into_owned();
    }

    String::from_utf8_lossy(bytes).into_owned()
}
