//! Word-list sentiment estimator.

use regex::Regex;

use crate::patterns::Patterns;

/// Score of a text with no sentiment words.
pub const NEUTRAL_BASELINE: f64 = 0.5;
/// Weight of each whole-word occurrence.
pub const WORD_WEIGHT: f64 = 0.1;

/// Score `text` in `[0, 1]`.
///
/// Starts at [`NEUTRAL_BASELINE`], adds [`WORD_WEIGHT`] per positive word
/// occurrence and subtracts it per negative word occurrence. Words match on
/// word boundaries only, so `badly` never counts as `bad`.
pub(crate) fn sentiment_score(patterns: &Patterns, text: &str) -> f64 {
    let mut score = NEUTRAL_BASELINE;
    // Accumulate word by word in list order so float rounding is stable.
    for re in &patterns.positive_words {
        score += occurrences(re, text) * WORD_WEIGHT;
    }
    for re in &patterns.negative_words {
        score -= occurrences(re, text) * WORD_WEIGHT;
    }
    score.clamp(0.0, 1.0)
}

#[allow(clippy::cast_precision_loss)]
fn occurrences(re: &Regex, text: &str) -> f64 {
    re.find_iter(text).count() as f64
}
