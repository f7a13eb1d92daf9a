use std::collections::HashSet;

use capsniff_core::{ReviewRecord, ReviewVerdict, Sentiment};
use capsniff_engine::ReviewScoringEngine;
use proptest::prelude::*;

fn review_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("great product ".to_string()),
            Just("good ".to_string()),
            Just("bad ".to_string()),
            Just("amazing perfect ".to_string()),
            Just("!!! ".to_string()),
            Just("WOWWOWWOWWOW ".to_string()),
            Just("buy it now buy it now ".to_string()),
            "[a-z]{1,10} ",
            "\\PC{0,12}",
        ],
        0..80,
    )
    .prop_map(|parts| parts.concat())
}

fn record() -> impl Strategy<Value = ReviewRecord> {
    (
        0u64..1000,
        review_text(),
        prop::option::of("[a-zA-Z0-9_ ]{0,12}"),
        prop::option::of(-2.0f64..8.0),
    )
        .prop_map(|(id, text, author, rating)| ReviewRecord {
            id,
            text,
            author,
            rating,
            date: None,
        })
}

fn check_verdict(verdict: &ReviewVerdict) -> Result<(), TestCaseError> {
    prop_assert!((0.0..=1.0).contains(&verdict.suspicious_score));
    prop_assert!((0.1..=1.0).contains(&verdict.confidence));
    prop_assert!((0.0..=1.0).contains(&verdict.sentiment_score));
    prop_assert_eq!(
        verdict.is_suspicious,
        verdict.suspicious_score > ReviewVerdict::SUSPICION_THRESHOLD
    );
    prop_assert_eq!(verdict.sentiment, Sentiment::from_score(verdict.sentiment_score));
    if !verdict.is_suspicious {
        prop_assert!(verdict.flags.is_empty());
    }
    let unique: HashSet<_> = verdict.flags.iter().collect();
    prop_assert_eq!(unique.len(), verdict.flags.len());
    prop_assert!(verdict.flags.windows(2).all(|w| w[0] < w[1]));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn verdicts_respect_bounds_and_threshold(record in record()) {
        let engine = ReviewScoringEngine::new();
        let verdict = engine.score_review(&record);
        check_verdict(&verdict)?;
        prop_assert_eq!(&verdict.record, &record);
    }

    #[test]
    fn scoring_twice_is_identical(record in record()) {
        let engine = ReviewScoringEngine::new();
        let a = engine.score_review(&record);
        let b = engine.score_review(&record);
        prop_assert_eq!(a.suspicious_score.to_bits(), b.suspicious_score.to_bits());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn batch_partition_is_a_perfect_cover(records in prop::collection::vec(record(), 1..25)) {
        let engine = ReviewScoringEngine::new();
        let analysis = engine.analyze_batch(&records).unwrap();

        prop_assert_eq!(analysis.total, records.len());
        prop_assert_eq!(analysis.authentic + analysis.suspicious, analysis.total);
        prop_assert_eq!(analysis.authentic_reviews.len(), analysis.authentic);
        prop_assert_eq!(analysis.suspicious_reviews.len(), analysis.suspicious);
        prop_assert!(analysis.authentic_reviews.iter().all(|v| !v.is_suspicious));
        prop_assert!(analysis.suspicious_reviews.iter().all(|v| v.is_suspicious));
        prop_assert_eq!(analysis.sentiment_breakdown.total(), analysis.authentic);
        prop_assert!(analysis.overall_confidence >= 10 && analysis.overall_confidence <= 100);

        let percent = analysis.suspicious as f64 / analysis.total as f64 * 100.0;
        let expected = format!("{:.1}", (percent * 10.0).round() / 10.0);
        prop_assert_eq!(&analysis.fake_percentage, &expected);

        if analysis.authentic == 0 {
            prop_assert!((analysis.recommendation.confidence - 0.3).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn partitions_keep_input_order(records in prop::collection::vec(record(), 1..25)) {
        let engine = ReviewScoringEngine::new();
        let indexed: Vec<ReviewRecord> = records
            .into_iter()
            .enumerate()
            .map(|(i, r)| ReviewRecord { id: i as u64, ..r })
            .collect();
        let analysis = engine.analyze_batch(&indexed).unwrap();

        let ascending = |vs: &[ReviewVerdict]| vs.windows(2).all(|w| w[0].record.id < w[1].record.id);
        prop_assert!(ascending(&analysis.authentic_reviews));
        prop_assert!(ascending(&analysis.suspicious_reviews));
    }
}
