//! HTTP Extraction Provider
//!
//! Talks to an AlchemyAPI-style extraction service: three GET calls per URL
//! (`URLGetText`, `URLGetAuthor`, `URLGetTitle`), each returning a JSON object
//! with a `status`, an optional `statusInfo`, and the requested field.
//!
//! # Features
//!
//! - Async HTTP communication with the provider
//! - Response shape validated at the boundary
//! - Retry logic with exponential backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use slant_provider::HttpSource;
//!
//! let source = HttpSource::new("https://access.alchemyapi.com/calls", "my-api-key").unwrap();
//! ```

use crate::ProviderError;
use serde::Deserialize;
use slant_domain::traits::ArticleSource;
use slant_domain::{SourceDocument, SourceStatus};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Default provider endpoint
pub const DEFAULT_ENDPOINT: &str = "https://access.alchemyapi.com/calls";

/// Default timeout for provider requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of attempts per call
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// HTTP extraction provider
pub struct HttpSource {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Raw provider response; only `status` is interpreted before the field lookup
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    status: String,
    #[serde(rename = "statusInfo", default)]
    status_info: Option<String>,
    #[serde(flatten)]
    fields: HashMap<String, serde_json::Value>,
}

impl HttpSource {
    /// Create a new provider with the default timeout
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_timeout(endpoint, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new provider with a specific request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Communication(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Set the maximum number of attempts per call
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Fetch one field (`text`, `author` or `title`) for `url`
    async fn fetch_field(&self, call: &str, field: &str, url: &str) -> Result<(SourceStatus, String), ProviderError> {
        let request_url = format!("{}/url/{}", self.endpoint, call);

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            let sent = self
                .client
                .get(&request_url)
                .query(&[("apikey", self.api_key.as_str()), ("url", url), ("outputMode", "json")])
                .send()
                .await;

            match sent {
                Ok(response) if response.status().is_success() => {
                    let body = response.text().await.map_err(|e| {
                        ProviderError::Communication(format!("Failed to read response: {}", e))
                    })?;
                    return parse_response(&body, field);
                }
                Ok(response) => {
                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    last_error = Some(ProviderError::Communication(format!(
                        "HTTP {}: {}",
                        status, error_text
                    )));
                }
                Err(e) => {
                    last_error = Some(ProviderError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                warn!("{} attempt {} failed, retrying in {:?}", call, attempts, delay);
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| ProviderError::Communication("Max retries exceeded".to_string())))
    }
}

impl ArticleSource for HttpSource {
    type Error = ProviderError;

    async fn fetch(&self, url: &str) -> Result<SourceDocument, Self::Error> {
        if url.trim().is_empty() {
            return Err(ProviderError::InvalidInput("Invalid URL".to_string()));
        }

        let (text_status, text) = self.fetch_field("URLGetText", "text", url).await?;
        let (author_status, author) = self.fetch_field("URLGetAuthor", "author", url).await?;
        let (title_status, title) = self.fetch_field("URLGetTitle", "title", url).await?;

        debug!("Fetched {} chars of text for {}", text.len(), url);

        Ok(SourceDocument {
            status: text_status.and(author_status).and(title_status),
            text,
            author,
            title,
        })
    }
}

/// Validate a provider response body and pull out one string field
///
/// A missing or non-string field becomes an empty string; only a body that
/// is not a JSON object is an error.
fn parse_response(body: &str, field: &str) -> Result<(SourceStatus, String), ProviderError> {
    let response: ProviderResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    let status = SourceStatus::from_raw(&response.status, response.status_info.as_deref());
    let value = response
        .fields
        .get(field)
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok((status, value))
}
