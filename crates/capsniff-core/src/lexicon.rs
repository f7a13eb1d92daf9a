//! Word lists driving the review heuristics.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Marketing phrases typical of paid or templated reviews.
pub const GENERIC_PHRASES: &[&str] = &[
    "great product",
    "highly recommend",
    "amazing quality",
    "perfect",
    "excellent",
    "outstanding",
    "fantastic",
    "love it",
    "best purchase",
    "worth every penny",
];

/// Superlatives counted by the excessive-enthusiasm signal.
pub const ENTHUSIASM_WORDS: &[&str] = &["amazing", "perfect", "excellent", "outstanding"];

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "love",
    "perfect",
    "recommend",
    "quality",
    "fast",
    "easy",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "slow",
    "difficult",
    "poor",
    "waste",
    "disappointed",
    "broken",
];

/// The full set of word lists. Immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub generic_phrases: Vec<String>,
    pub enthusiasm_words: Vec<String>,
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let owned =
            |words: &[&str]| -> Vec<String> { words.iter().map(|w| (*w).to_string()).collect() };
        Self {
            generic_phrases: owned(GENERIC_PHRASES),
            enthusiasm_words: owned(ENTHUSIASM_WORDS),
            positive_words: owned(POSITIVE_WORDS),
            negative_words: owned(NEGATIVE_WORDS),
        }
    }
}

/// Load and validate a lexicon from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LexiconFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let lexicon: Lexicon = serde_yaml::from_str(&content)?;

    validate_lexicon(&lexicon)?;

    Ok(lexicon)
}

/// Check that every list is non-empty, has no blank or duplicate entries, and
/// that no word is both positive and negative.
///
/// # Errors
///
/// Returns `ConfigError::Validation` describing the first problem found.
pub fn validate_lexicon(lexicon: &Lexicon) -> Result<(), ConfigError> {
    let lists = [
        ("generic_phrases", &lexicon.generic_phrases),
        ("enthusiasm_words", &lexicon.enthusiasm_words),
        ("positive_words", &lexicon.positive_words),
        ("negative_words", &lexicon.negative_words),
    ];

    for (name, words) in lists {
        if words.is_empty() {
            return Err(ConfigError::Validation(format!("{name} must be non-empty")));
        }

        let mut seen = HashSet::new();
        for word in words {
            if word.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{name} contains a blank entry"
                )));
            }
            if !seen.insert(word.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate entry in {name}: '{word}'"
                )));
            }
        }
    }

    let positive: HashSet<String> = lexicon
        .positive_words
        .iter()
        .map(|w| w.to_lowercase())
        .collect();
    if let Some(word) = lexicon
        .negative_words
        .iter()
        .find(|w| positive.contains(&w.to_lowercase()))
    {
        return Err(ConfigError::Validation(format!(
            "'{word}' appears in both positive_words and negative_words"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_lexicon_is_valid() {
        assert!(validate_lexicon(&Lexicon::default()).is_ok());
    }

    #[test]
    fn default_lexicon_has_ten_generic_phrases() {
        assert_eq!(Lexicon::default().generic_phrases.len(), 10);
    }

    #[test]
    fn empty_list_is_rejected() {
        let lexicon = Lexicon {
            positive_words: Vec::new(),
            ..Lexicon::default()
        };
        let err = validate_lexicon(&lexicon).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.contains("positive_words")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn blank_entry_is_rejected() {
        let mut lexicon = Lexicon::default();
        lexicon.generic_phrases.push("   ".to_string());
        assert!(matches!(
            validate_lexicon(&lexicon),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn duplicate_is_rejected_case_insensitively() {
        let mut lexicon = Lexicon::default();
        lexicon.negative_words.push("BAD".to_string());
        let err = validate_lexicon(&lexicon).unwrap_err();
        assert!(err.to_string().contains("duplicate entry in negative_words"));
    }

    #[test]
    fn word_on_both_sentiment_lists_is_rejected() {
        let mut lexicon = Lexicon::default();
        lexicon.negative_words.push("fast".to_string());
        let err = validate_lexicon(&lexicon).unwrap_err();
        assert!(err.to_string().contains("'fast'"));
    }

    #[test]
    fn load_lexicon_reads_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "generic_phrases: [\"must buy\"]\n\
             enthusiasm_words: [\"wow\"]\n\
             positive_words: [\"nice\"]\n\
             negative_words: [\"meh\"]\n"
        )
        .unwrap();

        let lexicon = load_lexicon(file.path()).unwrap();
        assert_eq!(lexicon.generic_phrases, vec!["must buy".to_string()]);
        assert_eq!(lexicon.negative_words, vec!["meh".to_string()]);
    }

    #[test]
    fn load_lexicon_missing_file_is_io_error() {
        let err = load_lexicon(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::LexiconFileIo { .. }));
    }

    #[test]
    fn load_lexicon_missing_key_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "generic_phrases: [\"x\"]").unwrap();
        let err = load_lexicon(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::LexiconFileParse(_)));
    }
}
