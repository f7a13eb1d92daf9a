//! Reading scraped reviews from disk or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use capsniff_engine::RawReview;

/// Read a JSON array of [`RawReview`]s from `path`, or stdin when `path` is `-`.
pub(crate) fn read_raw_reviews(path: &Path) -> anyhow::Result<Vec<RawReview>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read reviews from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read reviews from {}", path.display()))?
    };

    parse_raw_reviews(&content)
        .with_context(|| format!("invalid review JSON in {}", path.display()))
}

pub(crate) fn parse_raw_reviews(content: &str) -> serde_json::Result<Vec<RawReview>> {
    serde_json::from_str(content)
}
