//! Plain-text rendering of analysis results.

use std::fmt::Write;

use capsniff_core::{AuthenticSummary, BatchAnalysis, Decision, ReviewVerdict};
use chrono::Utc;

const PREVIEW_CHARS: usize = 150;

/// Render a markdown report for a page analysis.
///
/// Reviews scored with less than `confidence_threshold` confidence are marked.
pub(crate) fn render_analysis(analysis: &BatchAnalysis, confidence_threshold: f64) -> String {
    let mut out = String::new();
    let now = Utc::now().format("%Y-%m-%d %H:%M UTC");
    let rec = &analysis.recommendation;

    let _ = writeln!(out, "# Review Analysis");
    let _ = writeln!(out);
    let _ = writeln!(out, "**Generated**: {now}");
    let _ = writeln!(out, "**Reviews**: {}", analysis.total);
    let _ = writeln!(out, "**Authentic**: {}", analysis.authentic);
    let _ = writeln!(out, "**Suspicious**: {}", analysis.suspicious);
    let _ = writeln!(out, "**Fake**: {}%", analysis.fake_percentage);
    let _ = writeln!(out, "**Confidence**: {}%", analysis.overall_confidence);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "## {} ({:.0}% confidence)",
        decision_title(rec.decision),
        rec.confidence * 100.0
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rec.reason);
    let _ = writeln!(out);

    let b = &analysis.sentiment_breakdown;
    let _ = writeln!(out, "## Authentic sentiment");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Positive | Negative | Neutral |");
    let _ = writeln!(out, "|----------|----------|---------|");
    let _ = writeln!(out, "| {} | {} | {} |", b.positive, b.negative, b.neutral);
    let _ = writeln!(out);

    if analysis.suspicious_reviews.is_empty() {
        let _ = writeln!(out, "No suspicious reviews found.");
        return out;
    }

    let _ = writeln!(
        out,
        "## Suspicious reviews ({})",
        analysis.suspicious_reviews.len()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "| Author | Rating | Score | Flags | Review |");
    let _ = writeln!(out, "|--------|--------|-------|-------|--------|");
    for verdict in &analysis.suspicious_reviews {
        let _ = writeln!(out, "{}", suspicious_row(verdict, confidence_threshold));
    }

    out
}

fn decision_title(decision: Decision) -> &'static str {
    match decision {
        Decision::Recommended => "Recommended",
        Decision::NotRecommended => "Not recommended",
        Decision::ProceedWithCaution => "Proceed with caution",
    }
}

fn suspicious_row(verdict: &ReviewVerdict, confidence_threshold: f64) -> String {
    let record = &verdict.record;
    let rating = if record.rating.is_some() {
        format!("{}", record.effective_rating())
    } else {
        "N/A".to_string()
    };
    let flags = verdict
        .flags
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ");
    let mut preview = preview(&record.text);
    if verdict.confidence < confidence_threshold {
        preview.push_str(" _(low confidence)_");
    }

    format!(
        "| {} | {} | {:.0}% | {} | {} |",
        record.author.as_deref().unwrap_or("Anonymous"),
        rating,
        verdict.suspicious_score * 100.0,
        flags,
        preview
    )
}

fn preview(text: &str) -> String {
    let flat = text.replace(['\n', '|'], " ");
    if flat.chars().count() > PREVIEW_CHARS {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        flat
    }
}

/// Render the authentic-review digest.
pub(crate) fn render_summary(summary: &AuthenticSummary) -> String {
    let mut out = String::new();
    let counts = &summary.sentiment_counts;

    let _ = writeln!(out, "# Authentic Reviews Summary");
    let _ = writeln!(out);
    let _ = writeln!(out, "## Overview");
    let _ = writeln!(out);
    let _ = writeln!(out, "- Total authentic reviews: {}", counts.total());
    let _ = writeln!(out, "- Positive reviews: {}", counts.positive);
    let _ = writeln!(out, "- Negative reviews: {}", counts.negative);
    let _ = writeln!(out, "- Neutral reviews: {}", counts.neutral);
    let _ = writeln!(out);

    let _ = writeln!(out, "## Key insights");
    let _ = writeln!(out);
    for insight in &summary.insights {
        let _ = writeln!(out, "- {insight}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## Common themes");
    let _ = writeln!(out);
    for theme in &summary.common_themes {
        let _ = writeln!(out, "- {theme}");
    }

    if !summary.highlight_reviews.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Highlights");
        let _ = writeln!(out);
        for review in &summary.highlight_reviews {
            let rating = review.record.effective_rating();
            let _ = writeln!(
                out,
                "- [{}] {rating} stars: \"{}\"",
                review.sentiment,
                preview(&review.record.text)
            );
        }
    }

    out
}
