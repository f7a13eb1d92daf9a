use serde::{Deserialize, Serialize};

/// Rating used when a review carries no rating of its own.
pub const DEFAULT_RATING: f64 = 3.0;

/// A single review as handed over by the page extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// Position of the review on the page.
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
    /// Star rating in `[1, 5]`. `None` is scored as [`DEFAULT_RATING`].
    #[serde(default)]
    pub rating: Option<f64>,
    /// Free-form date string, passed through untouched.
    #[serde(default)]
    pub date: Option<String>,
}

impl ReviewRecord {
    /// Convenience constructor for a record with only text.
    #[must_use]
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            author: None,
            rating: None,
            date: None,
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// The rating used for scoring: the record's own rating clamped to
    /// `[1, 5]`, or [`DEFAULT_RATING`] when absent or not a number.
    #[must_use]
    pub fn effective_rating(&self) -> f64 {
        match self.rating {
            Some(r) if r.is_finite() => r.clamp(1.0, 5.0),
            _ => DEFAULT_RATING,
        }
    }

    /// The author name if one is present and non-empty.
    #[must_use]
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Upper cut point: scores strictly above are positive.
    pub const POSITIVE_ABOVE: f64 = 0.6;
    /// Lower cut point: scores strictly below are negative.
    pub const NEGATIVE_BELOW: f64 = 0.4;

    /// Label a sentiment score in `[0, 1]`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > Self::POSITIVE_ABOVE {
            Sentiment::Positive
        } else if score < Self::NEGATIVE_BELOW {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// Reason attached to a suspicious review.
///
/// Variant order is the order flags appear on a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "Generic Language")]
    GenericLanguage,
    #[serde(rename = "Repetitive Content")]
    RepetitiveContent,
    #[serde(rename = "Excessive Enthusiasm")]
    ExcessiveEnthusiasm,
    #[serde(rename = "Too Short")]
    TooShort,
    #[serde(rename = "Suspicious Username")]
    SuspiciousUsername,
}

impl Flag {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Flag::GenericLanguage => "Generic Language",
            Flag::RepetitiveContent => "Repetitive Content",
            Flag::ExcessiveEnthusiasm => "Excessive Enthusiasm",
            Flag::TooShort => "Too Short",
            Flag::SuspiciousUsername => "Suspicious Username",
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Scoring result for one review. Serializes with the record's fields inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewVerdict {
    #[serde(flatten)]
    pub record: ReviewRecord,
    /// Suspicion in `[0, 1]`.
    pub suspicious_score: f64,
    pub is_suspicious: bool,
    pub sentiment: Sentiment,
    /// Raw sentiment score in `[0, 1]` behind [`Self::sentiment`].
    pub sentiment_score: f64,
    /// Length-based confidence in `[0.1, 1]`.
    pub confidence: f64,
    /// Empty unless `is_suspicious`.
    pub flags: Vec<Flag>,
}

impl ReviewVerdict {
    /// Suspicion score the review must exceed to be flagged.
    pub const SUSPICION_THRESHOLD: f64 = 0.6;
}
