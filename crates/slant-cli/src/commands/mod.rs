//! Command implementations for the CLI.

mod analyze;
mod list;
mod score;
mod show;

pub use analyze::{analyze_url, execute_analyze};
pub use list::{execute_list, list_articles};
pub use score::execute_score;
pub use show::execute_show;

use crate::config::Config;
use crate::error::Result;
use slant_analyzer::{Analyzer, Lexicon};
use slant_provider::http::HttpSource;
use slant_store::JsonFileStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Analyzer wired to the HTTP provider and the JSON file store.
pub type SlantAnalyzer = Analyzer<HttpSource, JsonFileStore>;

/// Load the lexicon named by the configuration.
pub fn load_lexicon(config: &Config) -> Result<Arc<Lexicon>> {
    let lexicon = Lexicon::load(&config.lexicon_path)?;
    Ok(Arc::new(lexicon))
}

/// Open the article store named by the configuration.
pub fn open_store(config: &Config) -> Result<JsonFileStore> {
    Ok(JsonFileStore::new(&config.store_dir, config.key_strategy)?)
}

/// Build the full pipeline from configuration.
pub fn build_analyzer(config: &Config) -> Result<SlantAnalyzer> {
    let lexicon = load_lexicon(config)?;
    let store = open_store(config)?;
    let source = HttpSource::with_timeout(
        config.provider.endpoint.as_str(),
        config.provider.api_key.as_str(),
        Duration::from_secs(config.provider.timeout_secs),
    )?
    .with_max_retries(config.provider.max_retries);

    info!(
        "Pipeline ready: {} lexicon entries, store at {}",
        lexicon.len(),
        config.store_dir.display()
    );

    Ok(Analyzer::new(source, store, lexicon, config.analyzer.clone()))
}
