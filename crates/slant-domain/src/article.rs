//! Article module - the persisted result of analyzing one news article

use std::fmt;

/// An analyzed article
///
/// Articles are immutable once constructed: every field is known only after
/// extraction and scoring have finished, so there is no partially built state.
///
/// `bias` is either `0.0` (no sentences) or the arithmetic mean of the
/// per-sentence sentiment over all of `sentences`, unscored sentences
/// contributing `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// The URL the article was extracted from
    pub url: String,

    /// Author as reported by the extraction provider (may be empty)
    pub author: String,

    /// Title as reported by the extraction provider (may be empty)
    pub title: String,

    /// Sentences produced by the sentence segmenter, in document order
    pub sentences: Vec<String>,

    /// Article-level sentiment
    pub bias: f64,
}

impl Article {
    /// Create a new article
    ///
    /// # Examples
    ///
    /// ```
    /// use slant_domain::Article;
    ///
    /// let article = Article::new(
    ///     "https://example.com/story",
    ///     "Jane Doe",
    ///     "A story",
    ///     vec!["It was fine.".to_string()],
    ///     0.5,
    /// );
    /// assert_eq!(article.sentence_count(), 1);
    /// ```
    pub fn new(
        url: impl Into<String>,
        author: impl Into<String>,
        title: impl Into<String>,
        sentences: Vec<String>,
        bias: f64,
    ) -> Self {
        Self {
            url: url.into(),
            author: author.into(),
            title: title.into(),
            sentences,
            bias,
        }
    }

    /// Number of sentences that contributed to the bias
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Coarse label for the bias sign
    pub fn leaning(&self) -> &'static str {
        if self.bias > 0.0 {
            "positive"
        } else if self.bias < 0.0 {
            "negative"
        } else {
            "neutral"
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.title.is_empty() { "(untitled)" } else { &self.title };
        write!(f, "{} [bias {:.4}, {} sentences]", title, self.bias, self.sentences.len())
    }
}
