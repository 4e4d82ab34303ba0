//! Slant Storage Layer
//!
//! Implements the `ArticleStore` trait with one pretty-printed JSON file per
//! article inside a store directory.
//!
//! # Architecture
//!
//! - The file name is a storage key derived from the article title
//! - Records are write-once: a second store under the same key is a no-op
//! - A record is staged in a temp file and published with a no-clobber
//!   rename, so readers never see a partial record
//!
//! # Examples
//!
//! ```no_run
//! use slant_store::{JsonFileStore, KeyStrategy};
//!
//! let store = JsonFileStore::new("articles", KeyStrategy::TitlePrefix).unwrap();
//! // Store is now ready for article operations
//! ```

#![warn(missing_docs)]

mod key;
mod record;

pub use key::{KeyStrategy, StorageKey, TITLE_PREFIX_CHARS, UNTITLED_KEY};
pub use record::{from_mapping, ArticleRecord};

use slant_domain::traits::{ArticleStore, StoreOutcome};
use slant_domain::Article;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record exists at the given path
    #[error("Article not found: {0}")]
    NotFound(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Record is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record is JSON but not a valid article
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// JSON file-backed implementation of ArticleStore
///
/// # Concurrency
///
/// Two stores racing on the same key cannot both write: the record is
/// published with `persist_noclobber`, so exactly one caller gets `Written`
/// and the rest get `AlreadyStored`.
///
/// A key file that exists but does not hold a valid record (left by an
/// interrupted writer or edited by hand) is replaced rather than treated as
/// stored.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    strategy: KeyStrategy,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn new<P: AsRef<Path>>(dir: P, strategy: KeyStrategy) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, strategy })
    }

    /// Store directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Storage key for an article
    pub fn key_for(&self, article: &Article) -> StorageKey {
        StorageKey::from_title(&article.title, self.strategy)
    }

    /// Path a key is stored under
    pub fn path_for(&self, key: &StorageKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    /// Load the article stored under a key
    pub fn load_key(&self, key: &StorageKey) -> Result<Article, StoreError> {
        self.load_path(&self.path_for(key))
    }

    /// Paths of every stored record, sorted by file name
    pub fn list(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Load an article from any path
    pub fn load_path(&self, path: &Path) -> Result<Article, StoreError> {
        load(path)
    }

    /// Overwrite an unreadable record with a staged one
    fn replace(&self, staged: NamedTempFile, path: PathBuf, reason: &str) -> Result<StoreOutcome, StoreError> {
        warn!("Replacing unreadable record at {}: {}", path.display(), reason);
        staged.persist(&path).map_err(|e| e.error)?;
        Ok(StoreOutcome::Written(path))
    }

    /// Warn when the record holding the key belongs to another title
    fn check_collision(&self, path: &Path, existing: &Article, article: &Article) {
        if existing.title != article.title {
            warn!(
                "Storage key collision at {}: '{}' not stored, key held by '{}'",
                path.display(),
                article.title,
                existing.title
            );
        } else {
            debug!("Article already stored at {}", path.display());
        }
    }
}

impl ArticleStore for JsonFileStore {
    type Error = StoreError;

    fn store(&self, article: &Article) -> Result<StoreOutcome, Self::Error> {
        let key = self.key_for(article);
        let path = self.path_for(&key);

        let mut contents = serde_json::to_string_pretty(&ArticleRecord::from(article))?;
        contents.push('\n');

        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(contents.as_bytes())?;
        staged.as_file().sync_all()?;

        let staged = match staged.persist_noclobber(&path) {
            Ok(_) => {
                debug!("Stored '{}' under key '{}'", article.title, key);
                return Ok(StoreOutcome::Written(path));
            }
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => e.file,
            Err(e) => return Err(e.error.into()),
        };

        match load(&path) {
            Ok(existing) => {
                self.check_collision(&path, &existing, article);
                Ok(StoreOutcome::AlreadyStored(path))
            }
            Err(StoreError::Json(e)) => self.replace(staged, path, &e.to_string()),
            Err(StoreError::InvalidData(e)) => self.replace(staged, path, &e),
            Err(e) => Err(e),
        }
    }

    fn load(&self, path: &Path) -> Result<Article, Self::Error> {
        load(path)
    }
}

/// Load a persisted article from a file
pub fn load<P: AsRef<Path>>(path: P) -> Result<Article, StoreError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(StoreError::NotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    from_mapping(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article::new(
            "https://example.com/story",
            "Jane Doe",
            title,
            vec!["It was good.".to_string(), "Then it was bad.".to_string()],
            0.25,
        )
    }

    #[test]
    fn test_store_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("articles");
        let store = JsonFileStore::new(&dir, KeyStrategy::TitlePrefix).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_written_file_uses_key() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(tmp.path(), KeyStrategy::TitlePrefix).unwrap();

        let outcome = store.store(&article("Economy grows again")).unwrap();
        assert!(outcome.was_written());
        assert_eq!(outcome.path(), tmp.path().join("Economy gr.json"));
    }

    #[test]
    fn test_persisted_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(tmp.path(), KeyStrategy::TitlePrefix).unwrap();
        let outcome = store.store(&article("Fields")).unwrap();

        let raw = fs::read_to_string(outcome.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        for field in ["url", "author", "title", "sentences", "bias"] {
            assert!(value.get(field).is_some(), "missing {}", field);
        }
    }

    #[test]
    fn test_load_missing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let result = load(tmp.path().join("nope.json"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_load_directory_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(load(tmp.path()), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_load_corrupt_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load(&path), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_list_only_json_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(tmp.path(), KeyStrategy::TitlePrefix).unwrap();
        store.store(&article("Beta story")).unwrap();
        store.store(&article("Alpha story")).unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let names: Vec<String> = store
            .list()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["Alpha stor.json", "Beta story.json"]);
    }
}
