//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the analysis pipeline and
//! infrastructure. Implementations live in other crates.

use crate::{Article, SourceDocument};
use std::path::{Path, PathBuf};

/// Trait for fetching raw article data for a URL
///
/// Implemented by the infrastructure layer (slant-provider)
#[allow(async_fn_in_trait)]
pub trait ArticleSource {
    /// Error type for fetch operations
    type Error;

    /// Fetch text, author and title for the given URL
    ///
    /// A non-OK provider status is reported through
    /// [`SourceDocument::status`], not as an error.
    async fn fetch(&self, url: &str) -> Result<SourceDocument, Self::Error>;
}

/// Result of a store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The article was written to this path
    Written(PathBuf),

    /// A record already existed under the article's key; nothing was written
    AlreadyStored(PathBuf),
}

impl StoreOutcome {
    /// Path of the record, whether or not this call wrote it
    pub fn path(&self) -> &Path {
        match self {
            StoreOutcome::Written(p) | StoreOutcome::AlreadyStored(p) => p,
        }
    }

    /// True when this call wrote the record
    pub fn was_written(&self) -> bool {
        matches!(self, StoreOutcome::Written(_))
    }
}

/// Trait for persisting and reloading analyzed articles
///
/// Implemented by the infrastructure layer (slant-store)
pub trait ArticleStore {
    /// Error type for store operations
    type Error;

    /// Persist an article unless a record already exists under its key
    fn store(&self, article: &Article) -> Result<StoreOutcome, Self::Error>;

    /// Load a previously persisted article from a path
    fn load(&self, path: &Path) -> Result<Article, Self::Error>;
}
