//! Batch statistics and the purchase recommendation.

use capsniff_core::{
    BatchAnalysis, Decision, Recommendation, ReviewVerdict, Sentiment, SentimentBreakdown,
};

use crate::error::EngineError;

/// Fake ratio above which the page is not recommended outright.
const HIGH_FAKE_RATIO: f64 = 0.4;
/// Fake ratio below which a mostly positive page can be recommended.
const LOW_FAKE_RATIO: f64 = 0.2;
const MOSTLY_POSITIVE: f64 = 0.7;
const MOSTLY_NEGATIVE: f64 = 0.3;

/// Reduce a page's verdicts into a [`BatchAnalysis`].
///
/// Verdicts are split into authentic and suspicious lists, each keeping the
/// input order. The sentiment breakdown only counts authentic reviews; the
/// overall confidence averages every verdict.
///
/// # Errors
///
/// Returns [`EngineError::EmptyBatch`] if `verdicts` is empty.
pub fn aggregate(verdicts: Vec<ReviewVerdict>) -> Result<BatchAnalysis, EngineError> {
    if verdicts.is_empty() {
        return Err(EngineError::EmptyBatch);
    }

    let total = verdicts.len();
    let overall_confidence = overall_confidence(&verdicts);
    let (suspicious, authentic): (Vec<_>, Vec<_>) =
        verdicts.into_iter().partition(|v| v.is_suspicious);

    let sentiment_breakdown = SentimentBreakdown::tally(&authentic);
    let recommendation = recommend(&authentic, &suspicious);

    tracing::info!(
        total,
        authentic = authentic.len(),
        suspicious = suspicious.len(),
        decision = %recommendation.decision,
        "analyzed review batch"
    );

    Ok(BatchAnalysis {
        total,
        authentic: authentic.len(),
        suspicious: suspicious.len(),
        fake_percentage: fake_percentage(suspicious.len(), total),
        sentiment_breakdown,
        recommendation,
        suspicious_reviews: suspicious,
        authentic_reviews: authentic,
        overall_confidence,
    })
}

/// Decide whether to buy, first matching rule wins:
///
/// 1. no authentic reviews: proceed with caution (0.3)
/// 2. fake ratio above 0.4: not recommended (0.8)
/// 3. positive ratio above 0.7 and fake ratio below 0.2: recommended (0.9)
/// 4. positive ratio below 0.3: not recommended (0.8)
/// 5. otherwise: proceed with caution (0.5)
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn recommend(authentic: &[ReviewVerdict], suspicious: &[ReviewVerdict]) -> Recommendation {
    if authentic.is_empty() {
        return recommendation(
            Decision::ProceedWithCaution,
            0.3,
            "No authentic reviews found to analyze",
        );
    }

    let positive = authentic
        .iter()
        .filter(|v| v.sentiment == Sentiment::Positive)
        .count();
    let positive_ratio = positive as f64 / authentic.len() as f64;
    let fake_ratio = suspicious.len() as f64 / (authentic.len() + suspicious.len()) as f64;

    if fake_ratio > HIGH_FAKE_RATIO {
        recommendation(
            Decision::NotRecommended,
            0.8,
            "High percentage of fake reviews detected",
        )
    } else if positive_ratio > MOSTLY_POSITIVE && fake_ratio < LOW_FAKE_RATIO {
        recommendation(
            Decision::Recommended,
            0.9,
            "Mostly positive authentic reviews",
        )
    } else if positive_ratio < MOSTLY_NEGATIVE {
        recommendation(
            Decision::NotRecommended,
            0.8,
            "Mostly negative authentic reviews",
        )
    } else {
        recommendation(
            Decision::ProceedWithCaution,
            0.5,
            "Mixed reviews, consider carefully",
        )
    }
}

fn recommendation(decision: Decision, confidence: f64, reason: &str) -> Recommendation {
    Recommendation {
        decision,
        confidence,
        reason: reason.to_string(),
    }
}

/// `suspicious / total * 100` rounded half-up to one decimal place.
#[allow(clippy::cast_precision_loss)]
fn fake_percentage(suspicious: usize, total: usize) -> String {
    let percent = suspicious as f64 / total as f64 * 100.0;
    let tenths = (percent * 10.0).round();
    format!("{:.1}", tenths / 10.0)
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn overall_confidence(verdicts: &[ReviewVerdict]) -> u32 {
    let sum: f64 = verdicts.iter().map(|v| v.confidence).sum();
    let mean = sum / verdicts.len() as f64;
    (mean * 100.0).round() as u32
}
