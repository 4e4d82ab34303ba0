//! List command implementation.

use crate::error::Result;
use crate::output::Formatter;
use slant_domain::Article;
use slant_store::JsonFileStore;
use std::path::PathBuf;
use tracing::warn;

/// Load every readable record in the store; unreadable ones are skipped.
pub fn list_articles(store: &JsonFileStore) -> Result<Vec<(PathBuf, Article)>> {
    let mut articles = Vec::new();
    for path in store.list()? {
        match store.load_path(&path) {
            Ok(article) => articles.push((path, article)),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }
    Ok(articles)
}

/// Execute the list command.
pub fn execute_list(store: &JsonFileStore, formatter: &Formatter) -> Result<usize> {
    let articles = list_articles(store)?;
    println!("{}", formatter.format_articles(&articles)?);
    Ok(articles.len())
}
