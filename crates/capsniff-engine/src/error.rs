use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot analyze an empty batch: at least one review is required")]
    EmptyBatch,

    #[error("invalid lexicon pattern: {0}")]
    Pattern(#[from] regex::Error),
}
