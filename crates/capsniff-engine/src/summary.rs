//! Reader-facing digest of the authentic reviews on a page.

use std::cmp::Ordering;

use capsniff_core::{AuthenticSummary, ReviewVerdict, Sentiment, SentimentBreakdown};

use crate::features::char_len;

/// Reviews must be longer than this to be highlighted.
const HIGHLIGHT_MIN_LEN: usize = 50;
const HIGHLIGHT_POSITIVE: usize = 2;
const HIGHLIGHT_NEGATIVE: usize = 1;

struct ThemeGroup {
    keywords: &'static [&'static str],
    favourable: &'static str,
    unfavourable: &'static str,
}

const THEME_GROUPS: &[ThemeGroup] = &[
    ThemeGroup {
        keywords: &["quality", "build", "material", "construction", "durable", "sturdy", "solid"],
        favourable: "Good build quality and materials",
        unfavourable: "Quality concerns mentioned",
    },
    ThemeGroup {
        keywords: &["price", "cost", "value", "money", "expensive", "cheap", "affordable"],
        favourable: "Good value for money",
        unfavourable: "Price concerns raised",
    },
    ThemeGroup {
        keywords: &["service", "support", "help", "staff", "customer service"],
        favourable: "Excellent customer service",
        unfavourable: "Customer service issues",
    },
    ThemeGroup {
        keywords: &["delivery", "shipping", "fast", "quick", "slow", "delayed"],
        favourable: "Fast and reliable delivery",
        unfavourable: "Delivery issues reported",
    },
];

/// Summarize `authentic` reviews. Returns `None` when there are none.
#[must_use]
pub fn summarize(authentic: &[ReviewVerdict]) -> Option<AuthenticSummary> {
    if authentic.is_empty() {
        return None;
    }

    let sentiment_counts = SentimentBreakdown::tally(authentic);

    Some(AuthenticSummary {
        sentiment_counts,
        insights: insights(authentic, &sentiment_counts),
        common_themes: common_themes(authentic),
        highlight_reviews: highlight_reviews(authentic),
    })
}

#[allow(clippy::cast_precision_loss)]
fn insights(reviews: &[ReviewVerdict], counts: &SentimentBreakdown) -> Vec<String> {
    let total = reviews.len() as f64;
    let mut insights = Vec::new();

    if counts.positive as f64 > total * 0.7 {
        insights.push("Overwhelmingly positive customer feedback".to_string());
    } else if counts.negative as f64 > total * 0.7 {
        insights.push("Predominantly negative customer experience".to_string());
    } else {
        insights.push("Mixed customer opinions with varied experiences".to_string());
    }

    let avg_len = reviews
        .iter()
        .map(|r| char_len(&r.record.text) as f64)
        .sum::<f64>()
        / total;
    if avg_len > 200.0 {
        insights.push("Customers provide detailed, thoughtful reviews".to_string());
    } else if avg_len < 50.0 {
        insights.push("Most reviews are brief and to the point".to_string());
    }

    let avg_rating = reviews
        .iter()
        .map(|r| r.record.effective_rating())
        .sum::<f64>()
        / total;
    if avg_rating > 4.0 {
        insights.push(format!("High average rating of {avg_rating:.1}/5 stars"));
    } else if avg_rating < 2.5 {
        insights.push(format!("Low average rating of {avg_rating:.1}/5 stars"));
    }

    insights
}

fn common_themes(reviews: &[ReviewVerdict]) -> Vec<String> {
    let lowered: Vec<String> = reviews.iter().map(|r| r.record.text.to_lowercase()).collect();
    let all_text = lowered.join(" ");
    let mut themes = Vec::new();

    for group in THEME_GROUPS {
        if !group.keywords.iter().any(|k| all_text.contains(k)) {
            continue;
        }

        let mentions = |sentiment: Sentiment| {
            reviews
                .iter()
                .zip(&lowered)
                .filter(|(r, text)| {
                    r.sentiment == sentiment && group.keywords.iter().any(|k| text.contains(k))
                })
                .count()
        };

        if mentions(Sentiment::Positive) > mentions(Sentiment::Negative) {
            themes.push(group.favourable.to_string());
        } else {
            themes.push(group.unfavourable.to_string());
        }
    }

    if themes.is_empty() {
        let counts = SentimentBreakdown::tally(reviews);
        let theme = match counts.positive.cmp(&counts.negative) {
            Ordering::Greater => "Generally positive customer experience",
            Ordering::Less => "Mixed to negative customer feedback",
            Ordering::Equal => "Varied customer experiences",
        };
        themes.push(theme.to_string());
    }

    themes
}

/// Up to two positive and one negative review with substance, most
/// confident first.
fn highlight_reviews(reviews: &[ReviewVerdict]) -> Vec<ReviewVerdict> {
    let pick = |sentiment: Sentiment, count: usize| {
        let mut matching: Vec<&ReviewVerdict> = reviews
            .iter()
            .filter(|r| r.sentiment == sentiment && char_len(&r.record.text) > HIGHLIGHT_MIN_LEN)
            .collect();
        matching.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        matching.into_iter().take(count).cloned().collect::<Vec<_>>()
    };

    let mut highlights = pick(Sentiment::Positive, HIGHLIGHT_POSITIVE);
    highlights.extend(pick(Sentiment::Negative, HIGHLIGHT_NEGATIVE));
    highlights
}
