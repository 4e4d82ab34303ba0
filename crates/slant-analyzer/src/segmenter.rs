//! Rule-based sentence boundary disambiguation
//!
//! Text is split on whitespace runs that follow sentence-final punctuation
//! (`.`, `!`, `?`), optionally followed by one closing quote, unless the
//! punctuation belongs to a known honorific such as `Dr.`. Sentences that
//! open with a double quote are direct quotations and are dropped whole;
//! quotes inside a sentence are left alone.
//!
//! Honorifics only count as whole words: `Sandr. Then` ends a sentence,
//! where a plain suffix match on `dr.` would have kept it together. A name
//! that merely ends in one of the honorifics is not an honorific.
//!
//! Boundaries use [`char::is_whitespace`], so non-breaking spaces (U+00A0)
//! and other Unicode spaces separate sentences just like ASCII whitespace.
//! Extracted news text often carries them after a full stop.

/// Honorifics whose trailing period never ends a sentence
pub const ABBREVIATIONS: [&str; 6] = ["Mr.", "Mrs.", "Jr.", "Dr.", "Prof.", "Sr."];

// Whitespace below means any Unicode whitespace, U+00A0 included
const TERMINALS: [char; 3] = ['.', '!', '?'];
const CLOSING_QUOTES: [char; 4] = ['\'', '"', '\u{2019}', '\u{201D}'];
const OPENING_DOUBLE_QUOTES: [char; 3] = ['"', '\u{201C}', '\u{201D}'];

/// Splits raw article text into sentences
#[derive(Debug, Clone)]
pub struct Segmenter {
    drop_quoted: bool,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self { drop_quoted: true }
    }
}

impl Segmenter {
    /// Segmenter that drops quoted sentences
    pub fn new() -> Self {
        Self::default()
    }

    /// Segmenter that keeps sentences opening with a quote
    pub fn keep_quotes() -> Self {
        Self { drop_quoted: false }
    }

    /// Build a segmenter from the analyzer configuration
    pub fn from_config(config: &crate::AnalyzerConfig) -> Self {
        Self {
            drop_quoted: config.drop_quoted_sentences,
        }
    }

    /// Split `text` into trimmed, non-empty sentences in document order
    ///
    /// # Examples
    ///
    /// ```
    /// use slant_analyzer::Segmenter;
    ///
    /// let sentences = Segmenter::new().segment("Dr. Smith said hi. He left.");
    /// assert_eq!(sentences, vec!["Dr. Smith said hi.", "He left."]);
    /// ```
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for (idx, c) in text.char_indices() {
            if !c.is_whitespace() || idx == start {
                continue;
            }
            let before = &text[..idx];
            if ends_sentence(before) && !ends_with_abbreviation(before) {
                sentences.push(&text[start..idx]);
                start = idx;
            }
        }
        sentences.push(&text[start..]);

        sentences
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter(|s| !(self.drop_quoted && is_quotation(s)))
            .map(str::to_string)
            .collect()
    }
}

/// Split `text` with the default segmenter
pub fn segment(text: &str) -> Vec<String> {
    Segmenter::default().segment(text)
}

fn ends_sentence(before: &str) -> bool {
    let mut rev = before.chars().rev();
    match rev.next() {
        Some(c) if TERMINALS.contains(&c) => true,
        Some(c) if CLOSING_QUOTES.contains(&c) => {
            matches!(rev.next(), Some(t) if TERMINALS.contains(&t))
        }
        _ => false,
    }
}

fn ends_with_abbreviation(before: &str) -> bool {
    ABBREVIATIONS.iter().any(|abbr| {
        let Some(cut) = before.len().checked_sub(abbr.len()) else {
            return false;
        };
        if !before.is_char_boundary(cut) || !before[cut..].eq_ignore_ascii_case(abbr) {
            return false;
        }
        // "Dr." must be its own word, not the tail of "Sandr."
        before[..cut]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}

fn is_quotation(sentence: &str) -> bool {
    sentence
        .chars()
        .next()
        .is_some_and(|c| OPENING_DOUBLE_QUOTES.contains(&c))
}
