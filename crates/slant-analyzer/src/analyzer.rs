//! Core Analyzer implementation

use crate::aggregator::mean;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::lexicon::Lexicon;
use crate::scorer::score;
use crate::segmenter::Segmenter;
use crate::types::{AnalysisReport, SentenceScore};
use slant_domain::traits::{ArticleSource, ArticleStore};
use slant_domain::{Article, SourceDocument, SourceStatus};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The Analyzer turns a URL into a scored, persisted article
pub struct Analyzer<S, T>
where
    S: ArticleSource,
    T: ArticleStore,
{
    source: S,
    store: T,
    lexicon: Arc<Lexicon>,
    segmenter: Segmenter,
    config: AnalyzerConfig,
}

impl<S, T> Analyzer<S, T>
where
    S: ArticleSource,
    T: ArticleStore,
    S::Error: std::fmt::Display,
    T::Error: std::fmt::Display,
{
    /// Create a new Analyzer
    pub fn new(source: S, store: T, lexicon: Arc<Lexicon>, config: AnalyzerConfig) -> Self {
        let segmenter = Segmenter::from_config(&config);
        Self {
            source,
            store,
            lexicon,
            segmenter,
            config,
        }
    }

    /// The lexicon used for scoring
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The article store
    pub fn store(&self) -> &T {
        &self.store
    }

    /// Fetch, score and store the article at `url`
    pub async fn analyze(&self, url: &str) -> Result<AnalysisReport, AnalyzerError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AnalyzerError::InvalidInput("Invalid URL: empty".to_string()));
        }

        info!("Fetching article from {}", url);

        let document = timeout(self.config.fetch_timeout(), self.source.fetch(url))
            .await
            .map_err(|_| AnalyzerError::Timeout(self.config.fetch_timeout_secs))?
            .map_err(|e| AnalyzerError::Source(e.to_string()))?;

        self.analyze_document(url, document)
    }

    /// Score and store an already fetched document
    pub fn analyze_document(
        &self,
        url: &str,
        document: SourceDocument,
    ) -> Result<AnalysisReport, AnalyzerError> {
        if let SourceStatus::Warning(info) = &document.status {
            warn!("Provider reported a problem for {}: {}", url, info);
        }

        let sentences = self.segmenter.segment(&document.text);
        debug!("Segmented {} chars into {} sentences", document.text.len(), sentences.len());
        if sentences.is_empty() {
            warn!("No sentences extracted from {}; bias defaults to 0", url);
        }

        let sentence_scores: Vec<SentenceScore> = sentences
            .iter()
            .map(|sentence| {
                let value = score(sentence, &self.lexicon);
                debug!("{:+.3}  {}", value, sentence);
                SentenceScore {
                    sentence: sentence.clone(),
                    score: value,
                }
            })
            .collect();

        let scores: Vec<f64> = sentence_scores.iter().map(|s| s.score).collect();
        let bias = mean(&scores);

        let article = Article::new(url, document.author, document.title, sentences, bias);

        let outcome = self
            .store
            .store(&article)
            .map_err(|e| AnalyzerError::Store(e.to_string()))?;

        info!(
            "Analyzed '{}': bias {:.4} over {} sentences ({})",
            article.title,
            bias,
            article.sentence_count(),
            if outcome.was_written() { "stored" } else { "already stored" }
        );

        Ok(AnalysisReport {
            article,
            sentence_scores,
            status: document.status,
            outcome,
        })
    }

    /// Score a single sentence against the analyzer's lexicon
    pub fn score_sentence(&self, sentence: &str) -> f64 {
        score(sentence, &self.lexicon)
    }
}
