//! Turn raw strings pulled off a page into [`ReviewRecord`]s.

use capsniff_core::review::DEFAULT_RATING;
use capsniff_core::ReviewRecord;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTHOR: &str = "Anonymous";
pub const DEFAULT_DATE: &str = "Unknown";

/// One review element as scraped, before any cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReview {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Text, title, or aria-label of the rating element, e.g. `"4.5 out of 5 stars"`.
    #[serde(default)]
    pub rating_text: Option<String>,
    /// Class attribute of the rating element, e.g. `"a-icon a-star-4"`.
    #[serde(default)]
    pub rating_class: Option<String>,
    /// Number of filled/active star children in the rating element.
    #[serde(default)]
    pub filled_stars: Option<usize>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Clean up raw reviews, dropping any without text.
///
/// Ids are the position in `raw`, so dropped entries leave gaps and the id
/// still points at the original page element.
#[must_use]
pub fn normalize_reviews(raw: &[RawReview]) -> Vec<ReviewRecord> {
    let mut records = Vec::with_capacity(raw.len());

    for (index, review) in raw.iter().enumerate() {
        let Some(text) = review.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            tracing::warn!(index, "skipping review without text");
            continue;
        };

        records.push(ReviewRecord {
            id: index as u64,
            text: text.to_string(),
            author: Some(trimmed_or(review.author.as_deref(), DEFAULT_AUTHOR)),
            rating: Some(parse_rating(
                review.rating_text.as_deref(),
                review.rating_class.as_deref(),
                review.filled_stars,
            )),
            date: Some(trimmed_or(review.date.as_deref(), DEFAULT_DATE)),
        });
    }

    if records.len() < raw.len() {
        tracing::warn!(
            kept = records.len(),
            dropped = raw.len() - records.len(),
            "dropped reviews during normalization"
        );
    }

    records
}

fn trimmed_or(value: Option<&str>, default: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Resolve a star rating in `[1, 5]` from whatever the rating element offered.
///
/// Tried in order: the first number in `text` (`"4.5 out of 5"`), a star
/// class (`4-star`, `star-4`, `rating-4`), then a positive filled-star
/// count. Falls back to 3.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn parse_rating(text: Option<&str>, class: Option<&str>, filled_stars: Option<usize>) -> f64 {
    if let Some(rating) = text.and_then(rating_from_text) {
        return rating.clamp(1.0, 5.0);
    }
    if let Some(rating) = class.and_then(rating_from_class) {
        return rating.clamp(1.0, 5.0);
    }
    match filled_stars {
        Some(n) if n > 0 => (n as f64).clamp(1.0, 5.0),
        _ => DEFAULT_RATING,
    }
}

fn rating_from_text(text: &str) -> Option<f64> {
    let re = Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("valid rating number regex");
    re.find(text).and_then(|m| m.as_str().parse::<f64>().ok())
}

fn rating_from_class(class: &str) -> Option<f64> {
    let re =
        Regex::new(r"([0-9]+)-star|star-([0-9]+)|rating-([0-9]+)").expect("valid star class regex");
    let caps = re.captures(class)?;
    let digits = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3))?;
    // Parsed as f64 so oversized numbers clamp to 5 instead of failing.
    digits.as_str().parse::<f64>().ok()
}
