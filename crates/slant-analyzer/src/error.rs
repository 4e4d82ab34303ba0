//! Error types for the Analyzer

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a polarity lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    /// Lexicon resource missing or unreadable
    #[error("Failed to read lexicon {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line did not have exactly two tab-separated columns
    #[error("Malformed lexicon line {line}: expected 2 columns, found {columns}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// Number of columns found
        columns: usize,
    },

    /// The polarity column was not a finite number
    #[error("Invalid polarity on lexicon line {line}: {value:?}")]
    InvalidPolarity {
        /// 1-based line number
        line: usize,
        /// The offending value
        value: String,
    },
}

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The URL was missing or blank; nothing was fetched
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Extraction provider error
    #[error("Source error: {0}")]
    Source(String),

    /// Article store error
    #[error("Store error: {0}")]
    Store(String),

    /// Fetch timeout
    #[error("Fetch timeout after {0}s")]
    Timeout(u64),
}
