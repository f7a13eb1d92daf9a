use serde::{Deserialize, Serialize};

use crate::review::{ReviewVerdict, Sentiment};

/// Sentiment label counts over a set of verdicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentBreakdown {
    /// Count sentiment labels across `verdicts`.
    #[must_use]
    pub fn tally<'a, I>(verdicts: I) -> Self
    where
        I: IntoIterator<Item = &'a ReviewVerdict>,
    {
        let mut breakdown = Self::default();
        for verdict in verdicts {
            match verdict.sentiment {
                Sentiment::Positive => breakdown.positive += 1,
                Sentiment::Negative => breakdown.negative += 1,
                Sentiment::Neutral => breakdown.neutral += 1,
            }
        }
        breakdown
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Recommended,
    NotRecommended,
    ProceedWithCaution,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Recommended => write!(f, "recommended"),
            Decision::NotRecommended => write!(f, "not_recommended"),
            Decision::ProceedWithCaution => write!(f, "proceed_with_caution"),
        }
    }
}

/// Page-level purchase advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub decision: Decision,
    /// Confidence in the decision, in `[0, 1]`.
    pub confidence: f64,
    pub reason: String,
}

/// Result of analyzing every review found on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAnalysis {
    pub total: usize,
    /// Number of authentic reviews.
    pub authentic: usize,
    /// Number of suspicious reviews.
    pub suspicious: usize,
    /// `suspicious / total * 100` formatted to one decimal place, e.g. `"60.0"`.
    pub fake_percentage: String,
    /// Counted over authentic reviews only.
    pub sentiment_breakdown: SentimentBreakdown,
    pub recommendation: Recommendation,
    pub suspicious_reviews: Vec<ReviewVerdict>,
    pub authentic_reviews: Vec<ReviewVerdict>,
    /// Mean verdict confidence as a whole percentage.
    pub overall_confidence: u32,
}

/// Digest of the authentic reviews for a reader deciding whether to buy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticSummary {
    pub sentiment_counts: SentimentBreakdown,
    pub insights: Vec<String>,
    pub common_themes: Vec<String>,
    pub highlight_reviews: Vec<ReviewVerdict>,
}
