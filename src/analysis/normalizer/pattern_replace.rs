use regex::Regex;

use super::Normalizer;
use crate::error::{JsontokError, Result};

/// Pattern matching runs of non-word characters and underscores.
pub const PUNCTUATION_PATTERN: &str = r"[\W_]+";

/// A normalizer that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceNormalizer {
    pattern: Regex,
    replacement: String,
    trim: bool,
}

impl PatternReplaceNormalizer {
    /// Create a new pattern replace normalizer.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| JsontokError::Anyhow(anyhow::Error::from(e)))?,
            replacement: replacement.to_string(),
            trim: false,
        })
    }

    /// Collapse every run of punctuation, symbols, whitespace and underscores
    /// into a single space, then trim both ends.
    pub fn punctuation() -> Self {
        Self {
            pattern: punctuation_regex(),
            replacement: " ".to_string(),
            trim: true,
        }
    }

    /// Trim leading and trailing whitespace after replacing.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Get the regex pattern used by this normalizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

fn punctuation_regex() -> Regex {
    Regex::new(PUNCTUATION_PATTERN).expect("Punctuation pattern should be valid")
}

impl Normalizer for PatternReplaceNormalizer {
    fn normalize(&self, input: &str) -> String {
        let replaced = self
            .pattern
            .replace_all(input, regex::NoExpand(&self.replacement));

        if self.trim {
            replaced.trim().to_string()
        } else {
            replaced.into_owned()
        }
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
