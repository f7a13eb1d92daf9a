//! Shared value types, word lists, and configuration for CapSniff.

pub mod analysis;
pub mod app_config;
pub mod config;
pub mod lexicon;
pub mod review;

pub use analysis::{
    AuthenticSummary, BatchAnalysis, Decision, Recommendation, SentimentBreakdown,
};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use lexicon::{load_lexicon, Lexicon};
pub use review::{Flag, ReviewRecord, ReviewVerdict, Sentiment};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read lexicon file {path}: {source}")]
    LexiconFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon file: {0}")]
    LexiconFileParse(#[from] serde_yaml::Error),

    #[error("lexicon validation failed: {0}")]
    Validation(String),
}
