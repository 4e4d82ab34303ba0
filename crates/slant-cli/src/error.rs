//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Lexicon could not be loaded
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] slant_analyzer::LexiconError),

    /// Pipeline error for one URL
    #[error("{0}")]
    Analyzer(#[from] slant_analyzer::AnalyzerError),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] slant_store::StoreError),

    /// Provider setup error
    #[error("Provider error: {0}")]
    Provider(#[from] slant_provider::ProviderError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Some URLs of a batch failed
    #[error("{failed} of {total} URL(s) could not be analyzed")]
    PartialFailure {
        /// Failed URLs
        failed: usize,
        /// URLs attempted
        total: usize,
    },
}
