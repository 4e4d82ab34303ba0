//! Article-level bias aggregation

use crate::lexicon::Lexicon;
use crate::scorer::score;

/// Mean of per-sentence scores
///
/// An empty slice aggregates to `0.0`: an article with no sentences carries
/// no bias rather than an undefined one.
pub fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Bias of an article given its sentences
///
/// Every sentence counts toward the denominator, including sentences that
/// matched nothing in the lexicon.
///
/// # Examples
///
/// ```
/// use slant_analyzer::{aggregate, Lexicon};
///
/// let lexicon = Lexicon::from_entries([("good", 3.0)]);
/// let sentences = vec!["A good day.".to_string(), "It rained.".to_string()];
/// // "day." keeps its period, so only "good" matches: (3 + 0) / 2
/// assert_eq!(aggregate(&sentences, &lexicon), 1.5);
/// ```
pub fn aggregate<S: AsRef<str>>(sentences: &[S], lexicon: &Lexicon) -> f64 {
    let scores: Vec<f64> = sentences.iter().map(|s| score(s.as_ref(), lexicon)).collect();
    mean(&scores)
}
