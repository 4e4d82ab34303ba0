//! Slant Analyzer
//!
//! Estimates the sentiment polarity ("bias") of a news article.
//!
//! # Overview
//!
//! Raw article text is split into sentences by a rule-based sentence
//! boundary disambiguator, each sentence is scored against a word polarity
//! lexicon with negation handling, and the per-sentence scores are averaged
//! into one article-level value.
//!
//! # Architecture
//!
//! ```text
//! URL → ArticleSource → Segmenter → score() per sentence → mean → Article → ArticleStore
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use slant_analyzer::{Analyzer, AnalyzerConfig, Lexicon};
//! use slant_provider::MockSource;
//! use slant_store::{JsonFileStore, KeyStrategy};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let lexicon = Arc::new(Lexicon::load("AFINN-111.txt")?);
//! let source = MockSource::new("It was a good day. Nothing bad happened.", "Jane", "A day");
//! let store = JsonFileStore::new("articles", KeyStrategy::TitlePrefix)?;
//!
//! let analyzer = Analyzer::new(source, store, lexicon, AnalyzerConfig::default());
//! let report = analyzer.analyze("https://example.com/a-day").await?;
//!
//! println!("bias: {:.3}", report.article.bias);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod aggregator;
mod analyzer;
mod config;
mod error;
mod lexicon;
mod scorer;
mod segmenter;
mod types;


pub use aggregator::{aggregate, mean};
pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, LexiconError};
pub use lexicon::Lexicon;
pub use scorer::{negate, score};
pub use segmenter::{segment, Segmenter, ABBREVIATIONS};
pub use types::{AnalysisReport, SentenceScore};
