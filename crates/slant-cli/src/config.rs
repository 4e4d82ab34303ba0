//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use slant_analyzer::AnalyzerConfig;
use slant_provider::http::{DEFAULT_ENDPOINT, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use slant_store::KeyStrategy;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tab-separated word polarity lexicon
    #[serde(default = "default_lexicon_path")]
    pub lexicon_path: PathBuf,

    /// Directory holding stored articles
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,

    /// How storage keys are derived from titles
    #[serde(default)]
    pub key_strategy: KeyStrategy,

    /// Pipeline settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Extraction provider settings
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Extraction provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Base URL of the extraction API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key sent with every call
    #[serde(default)]
    pub api_key: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts per provider call
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(slant_dir()?.join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::path()?)
    }

    /// Load configuration from `path`, or defaults if absent.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        self.analyzer.validate().map_err(CliError::Config)?;
        if self.provider.timeout_secs == 0 {
            return Err(CliError::Config("provider.timeout_secs must be greater than 0".into()));
        }
        if self.provider.endpoint.trim().is_empty() {
            return Err(CliError::Config("provider.endpoint must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon_path: default_lexicon_path(),
            store_dir: default_store_dir(),
            key_strategy: KeyStrategy::default(),
            analyzer: AnalyzerConfig::default(),
            provider: ProviderSettings::default(),
            settings: Settings::default(),
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

/// `~/.slant`, home of the config and REPL history.
pub fn slant_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".slant"))
}

fn default_lexicon_path() -> PathBuf {
    PathBuf::from("AFINN-111.txt")
}

fn default_store_dir() -> PathBuf {
    PathBuf::from("articles")
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
