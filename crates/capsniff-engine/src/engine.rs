//! Public entry point tying the scoring stages together.

use capsniff_core::{AuthenticSummary, BatchAnalysis, Lexicon, ReviewRecord, ReviewVerdict};

use crate::aggregate::aggregate;
use crate::error::EngineError;
use crate::features::{self, SignalContributions};
use crate::patterns::Patterns;
use crate::scorer;
use crate::sentiment::sentiment_score;
use crate::summary;

/// Scores reviews for authenticity.
///
/// Holds only compiled word lists, so one engine can be shared freely across
/// threads and reused for any number of pages.
#[derive(Debug, Clone)]
pub struct ReviewScoringEngine {
    patterns: Patterns,
}

impl ReviewScoringEngine {
    /// Engine using the built-in word lists.
    ///
    /// # Panics
    ///
    /// Does not panic: the built-in lists are escaped literals well within
    /// regex size limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lexicon(&Lexicon::default()).expect("built-in lexicon compiles")
    }

    /// Engine using custom word lists.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Pattern`] if a list compiles to an oversized regex.
    pub fn with_lexicon(lexicon: &Lexicon) -> Result<Self, EngineError> {
        Ok(Self {
            patterns: Patterns::compile(lexicon)?,
        })
    }

    /// Score a single review.
    #[must_use]
    pub fn score_review(&self, record: &ReviewRecord) -> ReviewVerdict {
        scorer::score_review(&self.patterns, record)
    }

    /// Per-signal breakdown behind a review's suspicion score.
    #[must_use]
    pub fn contributions(&self, record: &ReviewRecord) -> SignalContributions {
        let sentiment = sentiment_score(&self.patterns, &record.text);
        features::extract(&self.patterns, record, sentiment)
    }

    /// Sentiment score of `text` in `[0, 1]`.
    #[must_use]
    pub fn sentiment_score(&self, text: &str) -> f64 {
        sentiment_score(&self.patterns, text)
    }

    /// Score every review on a page and aggregate the results.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyBatch`] if `records` is empty.
    pub fn analyze_batch(&self, records: &[ReviewRecord]) -> Result<BatchAnalysis, EngineError> {
        if records.is_empty() {
            return Err(EngineError::EmptyBatch);
        }
        let verdicts = records.iter().map(|r| self.score_review(r)).collect();
        aggregate(verdicts)
    }

    /// Digest of the authentic reviews in a finished analysis.
    #[must_use]
    pub fn summarize(&self, analysis: &BatchAnalysis) -> Option<AuthenticSummary> {
        summary::summarize(&analysis.authentic_reviews)
    }
}

impl Default for ReviewScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
