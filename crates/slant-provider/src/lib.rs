//! Slant Extraction Providers
//!
//! Pluggable implementations of the `ArticleSource` trait from `slant-domain`.
//!
//! # Providers
//!
//! - `MockSource`: Deterministic mock for testing
//! - `HttpSource`: AlchemyAPI-style text/author/title extraction over HTTP
//!
//! # Examples
//!
//! ```
//! use slant_provider::MockSource;
//! use slant_domain::traits::ArticleSource;
//!
//! # async fn example() {
//! let source = MockSource::new("Some text.", "Jane", "A title");
//! let document = source.fetch("https://example.com").await.unwrap();
//! assert_eq!(document.title, "A title");
//! # }
//! ```

#![warn(missing_docs)]

pub mod http;

use slant_domain::traits::ArticleSource;
use slant_domain::{SourceDocument, SourceStatus};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

pub use http::HttpSource;

/// Errors that can occur while fetching an article
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The URL was missing or blank
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error
    #[error("Provider error: {0}")]
    Other(String),
}

/// Mock extraction provider for deterministic testing
///
/// Returns pre-configured documents without making any network calls.
///
/// # Examples
///
/// ```
/// use slant_provider::MockSource;
/// use slant_domain::SourceDocument;
///
/// let mut source = MockSource::new("Default text.", "", "Default");
/// source.add_document("https://a.example", SourceDocument::ok("A text.", "Ann", "A"));
/// source.add_error("https://down.example");
/// ```
#[derive(Debug, Clone)]
pub struct MockSource {
    default_document: SourceDocument,
    documents: Arc<Mutex<HashMap<String, Option<SourceDocument>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockSource {
    /// Create a new MockSource returning the same successful document for every URL
    pub fn new(text: impl Into<String>, author: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_document(SourceDocument::ok(text, author, title))
    }

    /// Create a new MockSource returning `document` for every URL
    pub fn with_document(document: SourceDocument) -> Self {
        Self {
            default_document: document,
            documents: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a MockSource whose default document carries a non-OK status
    pub fn with_warning(info: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_document(SourceDocument {
            status: SourceStatus::Warning(info.into()),
            text: text.into(),
            author: String::new(),
            title: String::new(),
        })
    }

    /// Add a specific document for a given URL
    pub fn add_document(&mut self, url: impl Into<String>, document: SourceDocument) {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.into(), Some(document));
    }

    /// Configure to return an error for a specific URL
    pub fn add_error(&mut self, url: impl Into<String>) {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.into(), None);
    }

    /// Get the number of times fetch was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new("", "", "")
    }
}

impl ArticleSource for MockSource {
    type Error = ProviderError;

    async fn fetch(&self, url: &str) -> Result<SourceDocument, Self::Error> {
        *self.call_count.lock().unwrap_or_else(PoisonError::into_inner) += 1;

        if url.trim().is_empty() {
            return Err(ProviderError::InvalidInput("Invalid URL".to_string()));
        }

        let documents = self.documents.lock().unwrap_or_else(PoisonError::into_inner);
        match documents.get(url) {
            Some(Some(document)) => Ok(document.clone()),
            Some(None) => Err(ProviderError::Other("Mock error".to_string())),
            None => Ok(self.default_document.clone()),
        }
    }
}
