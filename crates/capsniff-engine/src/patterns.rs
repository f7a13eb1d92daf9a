//! Compiled form of a [`Lexicon`].

use capsniff_core::Lexicon;
use regex::Regex;

use crate::error::EngineError;

/// Patterns compiled once per engine and only read afterwards.
#[derive(Debug, Clone)]
pub(crate) struct Patterns {
    /// Lowercased generic phrases, matched by substring.
    pub(crate) generic_phrases: Vec<String>,
    /// `!!!`, runs of 10+ ASCII letters, or an enthusiasm word. Run against
    /// lowercased text, so the letter run catches any long word.
    pub(crate) enthusiasm: Regex,
    /// One whole-word, case-insensitive pattern per positive word, in list order.
    pub(crate) positive_words: Vec<Regex>,
    pub(crate) negative_words: Vec<Regex>,
}

impl Patterns {
    /// Compile every list in `lexicon`. Words are escaped, so failure only
    /// happens when a pattern exceeds the regex size limit.
    pub(crate) fn compile(lexicon: &Lexicon) -> Result<Self, EngineError> {
        let generic_phrases = lexicon
            .generic_phrases
            .iter()
            .map(|p| p.to_lowercase())
            .collect();

        let words = lexicon
            .enthusiasm_words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        // ASCII letters only, no case folding on the run.
        let enthusiasm = if words.is_empty() {
            Regex::new(r"!{3,}|[a-zA-Z]{10,}")?
        } else {
            Regex::new(&format!(r"!{{3,}}|[a-zA-Z]{{10,}}|(?i:{words})"))?
        };

        Ok(Self {
            generic_phrases,
            enthusiasm,
            positive_words: word_patterns(&lexicon.positive_words)?,
            negative_words: word_patterns(&lexicon.negative_words)?,
        })
    }
}

fn word_patterns(words: &[String]) -> Result<Vec<Regex>, EngineError> {
    words
        .iter()
        .map(|w| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(w))).map_err(EngineError::from))
        .collect()
}
