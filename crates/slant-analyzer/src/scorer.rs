//! Negation-aware lexicon scoring for a single sentence
//!
//! Tokens are split on any Unicode whitespace (runs collapse, U+00A0
//! included) and lowercased. A `not` or `n't` token
//! toggles negation scope for everything after it, so `not ... not` restores
//! plain scoring. Inside a negated scope a combined `not <word>` lexicon entry
//! wins; failing that, a plain entry `p` contributes `-p - 1.0`.

use crate::lexicon::Lexicon;

/// Adjustment applied to a plain polarity found inside a negated scope
pub fn negate(polarity: f64) -> f64 {
    polarity * -1.0 - 1.0
}

/// Sentiment of one sentence
///
/// Returns the mean polarity over contributing tokens, or `0.0` when no
/// token contributed or the contributions cancel out.
///
/// # Examples
///
/// ```
/// use slant_analyzer::{score, Lexicon};
///
/// let lexicon = Lexicon::from_entries([("happy", 3.0)]);
/// assert_eq!(score("I am happy", &lexicon), 3.0);
/// assert_eq!(score("I am not happy", &lexicon), -4.0);
/// ```
pub fn score(sentence: &str, lexicon: &Lexicon) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    let mut negated = false;

    for token in sentence.split_whitespace() {
        let word = token.to_lowercase();
        let probe = if negated {
            format!("not {}", word)
        } else {
            word.clone()
        };

        // The toggle lands before the lookups, so a negating token that is
        // itself in the lexicon is scored under its new scope.
        if word == "not" || word == "n't" {
            negated = !negated;
        }

        if let Some(polarity) = lexicon.lookup(&probe) {
            total += polarity;
            count += 1;
        } else if negated {
            if let Some(polarity) = lexicon.lookup(&word) {
                total += negate(polarity);
                count += 1;
            }
        }
    }

    if count == 0 || total == 0.0 {
        return 0.0;
    }
    total / count as f64
}
