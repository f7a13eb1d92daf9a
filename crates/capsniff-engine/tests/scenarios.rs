use capsniff_core::{Decision, Flag, ReviewRecord, Sentiment, SentimentBreakdown};
use capsniff_engine::{normalize_reviews, RawReview, ReviewScoringEngine};

const TEMPLATED: &str = "great product highly recommend amazing quality";
const STITCHING: &str = "The stitching came apart after two weeks of normal use, and customer support never responded to my three emails.";

fn templated(id: u64) -> ReviewRecord {
    ReviewRecord::new(id, TEMPLATED)
        .with_author("user123")
        .with_rating(5.0)
}

fn happy(id: u64) -> ReviewRecord {
    ReviewRecord::new(
        id,
        "Good blender, easy to clean and fast enough for smoothies every morning.",
    )
    .with_author("Dana")
    .with_rating(5.0)
}

fn unhappy(id: u64) -> ReviewRecord {
    ReviewRecord::new(id, "The lid arrived broken and the motor is slow and noisy.")
        .with_author("Marcus T")
        .with_rating(1.0)
}

#[test]
fn templated_review_with_throwaway_author_is_suspicious() {
    let engine = ReviewScoringEngine::new();
    let verdict = engine.score_review(&templated(0));

    // generic 0.4 + enthusiasm 0.1 + author 0.2
    assert!(
        (verdict.suspicious_score - 0.7).abs() < 1e-9,
        "unexpected score {}",
        verdict.suspicious_score
    );
    assert!(verdict.is_suspicious);
    assert_eq!(verdict.sentiment, Sentiment::Positive);
    assert_eq!(
        verdict.flags,
        vec![Flag::GenericLanguage, Flag::SuspiciousUsername]
    );
}

#[test]
fn detailed_complaint_is_authentic() {
    let engine = ReviewScoringEngine::new();
    let record = ReviewRecord::new(1, STITCHING)
        .with_author("Jordan_M")
        .with_rating(2.0);
    let verdict = engine.score_review(&record);

    assert!(verdict.suspicious_score.abs() < f64::EPSILON);
    assert!(!verdict.is_suspicious);
    assert!(verdict.flags.is_empty());
    // No listed sentiment words, so the text scores at the neutral baseline.
    assert_eq!(verdict.sentiment, Sentiment::Neutral);
    assert!((verdict.confidence - 0.8).abs() < 1e-9);
}

#[test]
fn mostly_fake_page_is_not_recommended() {
    let engine = ReviewScoringEngine::new();
    let mut records: Vec<ReviewRecord> = (0..6).map(templated).collect();
    records.extend((6..9).map(happy));
    records.push(unhappy(9));

    let analysis = engine.analyze_batch(&records).unwrap();

    assert_eq!(analysis.total, 10);
    assert_eq!(analysis.suspicious, 6);
    assert_eq!(analysis.authentic, 4);
    assert_eq!(analysis.fake_percentage, "60.0");
    assert_eq!(
        analysis.sentiment_breakdown,
        SentimentBreakdown {
            positive: 3,
            negative: 1,
            neutral: 0
        }
    );
    assert_eq!(analysis.recommendation.decision, Decision::NotRecommended);
    assert!((analysis.recommendation.confidence - 0.8).abs() < f64::EPSILON);
    assert_eq!(
        analysis.recommendation.reason,
        "High percentage of fake reviews detected"
    );
}

#[test]
fn page_without_authentic_reviews_needs_caution() {
    let engine = ReviewScoringEngine::new();
    let records: Vec<ReviewRecord> = (0..3).map(templated).collect();

    let analysis = engine.analyze_batch(&records).unwrap();

    assert_eq!(analysis.authentic, 0);
    assert_eq!(analysis.fake_percentage, "100.0");
    assert_eq!(analysis.recommendation.decision, Decision::ProceedWithCaution);
    assert!((analysis.recommendation.confidence - 0.3).abs() < f64::EPSILON);
    assert_eq!(
        analysis.recommendation.reason,
        "No authentic reviews found to analyze"
    );
    assert!(engine.summarize(&analysis).is_none());
}

#[test]
fn genuinely_positive_page_is_recommended() {
    let engine = ReviewScoringEngine::new();
    let records: Vec<ReviewRecord> = (0..5).map(happy).collect();

    let analysis = engine.analyze_batch(&records).unwrap();

    assert_eq!(analysis.recommendation.decision, Decision::Recommended);
    assert_eq!(analysis.overall_confidence, 70);
}

#[test]
fn overall_confidence_includes_suspicious_reviews() {
    let engine = ReviewScoringEngine::new();
    // 0.7 (templated, 46 chars) and 0.8 (stitching, 112 chars)
    let records = vec![
        templated(0),
        ReviewRecord::new(1, STITCHING).with_rating(2.0),
    ];
    let analysis = engine.analyze_batch(&records).unwrap();
    assert_eq!(analysis.overall_confidence, 75);
}

#[test]
fn scoring_is_idempotent() {
    let engine = ReviewScoringEngine::new();
    let record = templated(3);
    let first = engine.score_review(&record);
    let second = engine.score_review(&record);
    assert_eq!(first, second);
    assert_eq!(
        first.suspicious_score.to_bits(),
        second.suspicious_score.to_bits()
    );
}

#[test]
fn normalized_page_flows_through_engine() {
    let raw: Vec<RawReview> = serde_json::from_str(
        r#"[
            {"text": "  great product highly recommend amazing quality ", "author": "user123", "ratingText": "5.0 out of 5 stars"},
            {"text": ""},
            {"text": "Good blender, easy to clean and fast enough for smoothies every morning.", "author": "Dana", "ratingClass": "a-star-5"}
        ]"#,
    )
    .unwrap();

    let records = normalize_reviews(&raw);
    assert_eq!(records.len(), 2);

    let engine = ReviewScoringEngine::new();
    let analysis = engine.analyze_batch(&records).unwrap();
    assert_eq!(analysis.suspicious_reviews[0].record.id, 0);
    assert_eq!(analysis.authentic_reviews[0].record.id, 2);

    let summary = engine.summarize(&analysis).unwrap();
    assert_eq!(summary.sentiment_counts.positive, 1);
}

#[test]
fn analysis_serializes_with_camel_case_fields() {
    let engine = ReviewScoringEngine::new();
    let analysis = engine.analyze_batch(&[templated(0), happy(1)]).unwrap();
    let value = serde_json::to_value(&analysis).unwrap();

    assert_eq!(value["fakePercentage"], "50.0");
    assert_eq!(value["recommendation"]["decision"], "not_recommended");
    assert_eq!(value["suspiciousReviews"][0]["isSuspicious"], true);
    assert_eq!(
        value["suspiciousReviews"][0]["flags"][0],
        "Generic Language"
    );
}
