//! Result types for analysis

use slant_domain::{Article, SourceStatus, StoreOutcome};

/// Score of one sentence
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScore {
    /// The sentence text
    pub sentence: String,

    /// Its sentiment
    pub score: f64,
}

/// Result of analyzing one URL
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// The analyzed article
    pub article: Article,

    /// Per-sentence scores, in sentence order
    pub sentence_scores: Vec<SentenceScore>,

    /// Provider status for the fetch
    pub status: SourceStatus,

    /// Whether the store wrote the article or found it already present
    pub outcome: StoreOutcome,
}

impl AnalysisReport {
    /// Number of sentences that matched at least one lexicon entry
    pub fn scored_sentences(&self) -> usize {
        self.sentence_scores.iter().filter(|s| s.score != 0.0).count()
    }

    /// The most negative and most positive sentences, if any scored
    pub fn extremes(&self) -> Option<(&SentenceScore, &SentenceScore)> {
        let scored = self.sentence_scores.iter().filter(|s| s.score != 0.0);
        let min = scored
            .clone()
            .min_by(|a, b| a.score.total_cmp(&b.score))?;
        let max = scored.max_by(|a, b| a.score.total_cmp(&b.score))?;
        Some((min, max))
    }
}
