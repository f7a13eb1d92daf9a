//! Heuristic authenticity scoring for consumer reviews.
//!
//! Turns extracted review records into per-review verdicts (suspicion score,
//! sentiment, confidence, flags) and reduces a page's verdicts into summary
//! statistics and a purchase recommendation. Everything here is pure and
//! synchronous; callers own extraction, transport, and rendering.

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod features;
pub mod normalize;
pub mod scorer;
pub mod sentiment;
pub mod summary;

mod patterns;

pub use aggregate::{aggregate, recommend};
pub use engine::ReviewScoringEngine;
pub use error::EngineError;
pub use features::SignalContributions;
pub use normalize::{normalize_reviews, parse_rating, RawReview};
