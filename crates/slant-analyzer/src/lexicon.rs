//! Word polarity lexicon
//!
//! The lexicon is loaded once from a two-column tab-separated resource
//! (`word\tpolarity`, no header) and is read-only afterwards. Keys are stored
//! lowercased and lookups lowercase their argument, so case never affects a
//! match. Multi-word keys such as `not good` are ordinary entries.

use crate::error::LexiconError;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Immutable mapping from word to polarity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// Load a lexicon from a tab-separated file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let lexicon = Self::parse(BufReader::new(file)).map_err(|e| match e {
            LexiconError::Io { source, .. } => LexiconError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        info!("Loaded {} lexicon entries from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    /// Parse a lexicon from any buffered reader
    ///
    /// Blank lines are skipped. When a word appears more than once the last
    /// occurrence wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use slant_analyzer::Lexicon;
    ///
    /// let lexicon = Lexicon::parse("good\t3\nbad\t-3\n".as_bytes()).unwrap();
    /// assert_eq!(lexicon.lookup("Good"), Some(3.0));
    /// assert_eq!(lexicon.lookup("meh"), None);
    /// ```
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        let mut entries = HashMap::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| LexiconError::Io {
                path: Default::default(),
                source,
            })?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let columns: Vec<&str> = line.split('\t').collect();
            if columns.len() != 2 {
                return Err(LexiconError::Malformed {
                    line: line_no,
                    columns: columns.len(),
                });
            }

            let polarity = parse_polarity(columns[1]).ok_or_else(|| LexiconError::InvalidPolarity {
                line: line_no,
                value: columns[1].to_string(),
            })?;

            let word = columns[0].trim().to_lowercase();
            if let Some(previous) = entries.insert(word, polarity) {
                debug!(
                    "Duplicate lexicon key {:?} on line {} replaces {}",
                    columns[0], line_no, previous
                );
            }
        }

        Ok(Self { entries })
    }

    /// Build a lexicon from in-memory entries
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(word, polarity)| (word.as_ref().to_lowercase(), polarity))
                .collect(),
        }
    }

    /// Polarity of a word, or `None` when the word is unscored
    pub fn lookup(&self, word: &str) -> Option<f64> {
        match self.entries.get(word) {
            Some(p) => Some(*p),
            None if word.chars().any(char::is_uppercase) => {
                self.entries.get(&word.to_lowercase()).copied()
            }
            None => None,
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_polarity(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_basic() {
        let lexicon = Lexicon::parse("abandon\t-2\nabilities\t2\nnot good\t-2\n".as_bytes()).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.lookup("abandon"), Some(-2.0));
        assert_eq!(lexicon.lookup("not good"), Some(-2.0));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lexicon = Lexicon::parse("Happy\t3\n".as_bytes()).unwrap();
        assert_eq!(lexicon.lookup("happy"), Some(3.0));
        assert_eq!(lexicon.lookup("HAPPY"), Some(3.0));
    }

    #[test]
    fn test_missing_word_is_none_not_zero() {
        let lexicon = Lexicon::parse("zero\t0\n".as_bytes()).unwrap();
        assert_eq!(lexicon.lookup("zero"), Some(0.0));
        assert_eq!(lexicon.lookup("other"), None);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let lexicon = Lexicon::parse("good\t1\ngood\t3\n".as_bytes()).unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.lookup("good"), Some(3.0));
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let lexicon = Lexicon::parse("good\t3\r\n\r\nbad\t-3\r\n".as_bytes()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.lookup("bad"), Some(-3.0));
    }

    #[test]
    fn test_wrong_column_count() {
        let err = Lexicon::parse("good\t3\nbad -3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LexiconError::Malformed { line: 2, columns: 1 }));

        let err = Lexicon::parse("good\t3\t1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LexiconError::Malformed { line: 1, columns: 3 }));
    }

    #[test]
    fn test_non_numeric_polarity() {
        let err = Lexicon::parse("good\tvery\n".as_bytes()).unwrap_err();
        match err {
            LexiconError::InvalidPolarity { line, value } => {
                assert_eq!(line, 1);
                assert_eq!(value, "very");
            }
            other => panic!("Expected InvalidPolarity, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_polarity_rejected() {
        assert!(Lexicon::parse("good\tNaN\n".as_bytes()).is_err());
        assert!(Lexicon::parse("good\tinf\n".as_bytes()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Lexicon::load("/definitely/not/here/AFINN-111.txt").unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "outstanding\t5").unwrap();
        writeln!(file, "outrage\t-3").unwrap();

        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.lookup("outstanding"), Some(5.0));
        assert_eq!(lexicon.lookup("outrage"), Some(-3.0));
    }

    #[test]
    fn test_from_entries_lowercases() {
        let lexicon = Lexicon::from_entries([("Great", 3.0), ("Awful", -3.0)]);
        assert_eq!(lexicon.lookup("great"), Some(3.0));
        assert!(!lexicon.is_empty());
    }
}
