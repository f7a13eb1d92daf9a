//! Per-review suspicion, confidence, and flags.

use capsniff_core::{Flag, ReviewRecord, ReviewVerdict, Sentiment};

use crate::features::{self, SignalContributions};
use crate::patterns::Patterns;
use crate::sentiment::sentiment_score;

/// Matches beyond this count earn the "Excessive Enthusiasm" flag.
pub const ENTHUSIASM_FLAG_MIN_MATCHES: usize = 3;

const BASE_CONFIDENCE: f64 = 0.7;
const MIN_CONFIDENCE: f64 = 0.1;
const MAX_CONFIDENCE: f64 = 1.0;

/// Clamp the summed signal contributions into `[0, 1]`.
#[must_use]
pub fn suspicion_score(contributions: &SignalContributions) -> f64 {
    contributions.total().min(1.0)
}

/// Length-based confidence in `[0.1, 1]`.
///
/// Starts at 0.7, gains 0.1 past 100 characters and another 0.1 past 200,
/// and loses 0.2 under 30 characters.
#[must_use]
pub fn confidence(text: &str) -> f64 {
    let len = features::char_len(text);
    let mut confidence = BASE_CONFIDENCE;
    if len > 100 {
        confidence += 0.1;
    }
    if len > 200 {
        confidence += 0.1;
    }
    if len < 30 {
        confidence -= 0.2;
    }
    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Build the verdict for one record.
pub(crate) fn score_review(patterns: &Patterns, record: &ReviewRecord) -> ReviewVerdict {
    let sentiment = sentiment_score(patterns, &record.text);
    let contributions = features::extract(patterns, record, sentiment);
    let suspicious_score = suspicion_score(&contributions);
    let is_suspicious = suspicious_score > ReviewVerdict::SUSPICION_THRESHOLD;

    let flags = if is_suspicious {
        flags(patterns, record)
    } else {
        Vec::new()
    };

    tracing::debug!(
        review_id = record.id,
        suspicious_score,
        is_suspicious,
        flags = flags.len(),
        "scored review"
    );

    ReviewVerdict {
        record: record.clone(),
        suspicious_score,
        is_suspicious,
        sentiment: Sentiment::from_score(sentiment),
        sentiment_score: sentiment,
        confidence: confidence(&record.text),
        flags,
    }
}

/// Re-check each flaggable condition against the record, in [`Flag`] order.
fn flags(patterns: &Patterns, record: &ReviewRecord) -> Vec<Flag> {
    let lowered = record.text.to_lowercase();
    let checks = [
        (
            Flag::GenericLanguage,
            features::generic_match_count(patterns, &lowered) > 0,
        ),
        (Flag::RepetitiveContent, features::has_repetition(&lowered)),
        (
            Flag::ExcessiveEnthusiasm,
            features::enthusiasm_match_count(patterns, &lowered) > ENTHUSIASM_FLAG_MIN_MATCHES,
        ),
        (
            Flag::TooShort,
            features::char_len(&record.text) < features::MIN_TEXT_LEN,
        ),
        // Same condition as the author signal: a name containing `user`
        // is flagged too, not only names shorter than three characters.
        (
            Flag::SuspiciousUsername,
            features::has_suspicious_author(record.author_name()),
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(flag, hit)| hit.then_some(flag))
        .collect()
}
