//! Storage keys derived from article titles

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of title characters that make up a prefix key
pub const TITLE_PREFIX_CHARS: usize = 10;

/// Key used when an article has no title
pub const UNTITLED_KEY: &str = "untitled";

const HASH_HEX_CHARS: usize = 12;

/// How a storage key is derived from a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStrategy {
    /// First ten characters of the title
    ///
    /// Distinct titles sharing a prefix map to the same key, and the second
    /// one is then never stored.
    #[default]
    TitlePrefix,

    /// Title prefix plus a SHA-256 digest of the whole title
    TitleHash,
}

/// Deterministic on-disk identifier for an article
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Derive the key for `title` under `strategy`
    ///
    /// # Examples
    ///
    /// ```
    /// use slant_store::{KeyStrategy, StorageKey};
    ///
    /// let key = StorageKey::from_title("Markets rally on rate cut", KeyStrategy::TitlePrefix);
    /// assert_eq!(key.as_str(), "Markets ra");
    /// ```
    pub fn from_title(title: &str, strategy: KeyStrategy) -> Self {
        let prefix: String = title
            .chars()
            .take(TITLE_PREFIX_CHARS)
            .map(|c| if is_unsafe(c) { '_' } else { c })
            .collect();
        let prefix = if prefix.is_empty() { UNTITLED_KEY.to_string() } else { prefix };

        match strategy {
            KeyStrategy::TitlePrefix => Self(prefix),
            KeyStrategy::TitleHash => {
                let digest = Sha256::digest(title.as_bytes());
                let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
                Self(format!("{}-{}", prefix, &hex[..HASH_HEX_CHARS]))
            }
        }
    }

    /// The key as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name the record is stored under
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_unsafe(c: char) -> bool {
    matches!(c, '/' | '\\' | '\0') || c.is_control()
}
