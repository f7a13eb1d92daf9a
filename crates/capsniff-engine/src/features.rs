//! Lexical signals that make a review look fabricated.
//!
//! Each signal contributes a bounded, non-negative amount to the suspicion
//! score. Signals are independent of one another; the only shared input is
//! the sentiment score used by the rating divergence check.

use capsniff_core::ReviewRecord;
use serde::Serialize;

use crate::patterns::Patterns;

pub const GENERIC_PHRASE_WEIGHT: f64 = 0.2;
pub const GENERIC_PHRASE_CAP: f64 = 0.4;
pub const REPETITION_WEIGHT: f64 = 0.3;
pub const ENTHUSIASM_WEIGHT: f64 = 0.1;
pub const ENTHUSIASM_CAP: f64 = 0.3;
pub const LENGTH_EXTREMITY_WEIGHT: f64 = 0.2;
pub const AUTHOR_PATTERN_WEIGHT: f64 = 0.2;
pub const DIVERGENCE_WEIGHT: f64 = 0.3;

/// Texts shorter than this many characters are "too short".
pub const MIN_TEXT_LEN: usize = 20;
/// Texts longer than this many characters are "too long".
pub const MAX_TEXT_LEN: usize = 1000;
/// Shortest substring considered by the repetition check.
pub const MIN_REPEAT_UNIT: usize = 10;
/// Author names shorter than this are suspicious.
pub const MIN_AUTHOR_LEN: usize = 3;
/// Largest tolerated gap between normalized rating and sentiment score.
pub const MAX_RATING_SENTIMENT_GAP: f64 = 0.4;

/// Per-signal contributions for one review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalContributions {
    pub generic_phrase: f64,
    pub repetition: f64,
    pub enthusiasm: f64,
    pub length_extremity: f64,
    pub author_pattern: f64,
    pub rating_divergence: f64,
}

impl SignalContributions {
    /// Uncapped sum of all contributions.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.generic_phrase
            + self.repetition
            + self.enthusiasm
            + self.length_extremity
            + self.author_pattern
            + self.rating_divergence
    }
}

/// Compute every signal for `record`, given its sentiment score.
pub(crate) fn extract(
    patterns: &Patterns,
    record: &ReviewRecord,
    sentiment_score: f64,
) -> SignalContributions {
    let lowered = record.text.to_lowercase();
    let len = char_len(&record.text);

    SignalContributions {
        generic_phrase: count_weight(
            generic_match_count(patterns, &lowered),
            GENERIC_PHRASE_WEIGHT,
            GENERIC_PHRASE_CAP,
        ),
        repetition: if has_repetition(&lowered) {
            REPETITION_WEIGHT
        } else {
            0.0
        },
        enthusiasm: count_weight(
            enthusiasm_match_count(patterns, &lowered),
            ENTHUSIASM_WEIGHT,
            ENTHUSIASM_CAP,
        ),
        length_extremity: if is_length_extreme(len) {
            LENGTH_EXTREMITY_WEIGHT
        } else {
            0.0
        },
        author_pattern: if has_suspicious_author(record.author_name()) {
            AUTHOR_PATTERN_WEIGHT
        } else {
            0.0
        },
        rating_divergence: if rating_diverges(record.effective_rating(), sentiment_score) {
            DIVERGENCE_WEIGHT
        } else {
            0.0
        },
    }
}

#[allow(clippy::cast_precision_loss)]
fn count_weight(count: usize, weight: f64, cap: f64) -> f64 {
    (count as f64 * weight).min(cap)
}

/// Length in characters, not bytes.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Number of distinct generic phrases contained in `lowered`.
pub(crate) fn generic_match_count(patterns: &Patterns, lowered: &str) -> usize {
    patterns
        .generic_phrases
        .iter()
        .filter(|phrase| lowered.contains(phrase.as_str()))
        .count()
}

/// Number of non-overlapping enthusiasm matches in `lowered`.
pub(crate) fn enthusiasm_match_count(patterns: &Patterns, lowered: &str) -> usize {
    patterns.enthusiasm.find_iter(lowered).count()
}

#[must_use]
pub fn is_length_extreme(len: usize) -> bool {
    len < MIN_TEXT_LEN || len > MAX_TEXT_LEN
}

/// Whether an author name looks throwaway: contains `user` or is very short.
///
/// A missing or empty author is never suspicious.
#[must_use]
pub fn has_suspicious_author(author: Option<&str>) -> bool {
    author.is_some_and(|a| {
        !a.is_empty() && (a.to_lowercase().contains("user") || char_len(a) < MIN_AUTHOR_LEN)
    })
}

/// Whether the star rating and the text's sentiment disagree.
#[must_use]
pub fn rating_diverges(rating: f64, sentiment_score: f64) -> bool {
    let rating_score = (rating - 1.0) / 4.0;
    (sentiment_score - rating_score).abs() > MAX_RATING_SENTIMENT_GAP
}

/// Whether `text` contains a run of at least [`MIN_REPEAT_UNIT`] characters
/// repeated three or more times back to back. Runs never span a line break.
#[must_use]
pub fn has_repetition(text: &str) -> bool {
    text.split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .any(|line| line_has_repetition(&line.chars().collect::<Vec<_>>()))
}

/// A unit of length `p` repeated three times at `i` means
/// `chars[j] == chars[j + p]` for every `j` in `i..i + 2p`, so for each
/// period it is enough to look for a run of `2p` matching positions.
fn line_has_repetition(chars: &[char]) -> bool {
    let n = chars.len();
    for period in MIN_REPEAT_UNIT..=n / 3 {
        let needed = 2 * period;
        let mut run = 0;
        for j in 0..n - period {
            if chars[j] == chars[j + period] {
                run += 1;
                if run >= needed {
                    return true;
                }
            } else {
                run = 0;
            }
        }
    }
    false
}
