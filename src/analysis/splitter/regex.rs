//! Regex-based splitter implementation.

use std::sync::Arc;

use regex::Regex;

use super::{Splitter, WordStream};
use crate::error::{JsontokError, Result};

/// A regex-based splitter.
///
/// By default it extracts every match of the pattern as a word. Built with
/// [`RegexSplitter::with_gaps`] it instead treats matches as separators and
/// extracts the non-empty text between them.
#[derive(Clone, Debug)]
pub struct RegexSplitter {
    /// The regex pattern used to extract words
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexSplitter {
    /// Create a new regex splitter with the default pattern.
    ///
    /// The default pattern `r"\w+"` matches sequences of word characters.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new regex splitter with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| JsontokError::config(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexSplitter {
            pattern: Arc::new(regex),
            gaps: false,
        })
    }

    /// Create a splitter that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        let mut splitter = Self::with_pattern(pattern)?;
        splitter.gaps = true;
        Ok(splitter)
    }

    /// Get the regex pattern used by this splitter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this splitter extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }
}

impl Default for RegexSplitter {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Splitter for RegexSplitter {
    fn split(&self, text: &str) -> WordStream {
        let words: Vec<String> = if self.gaps {
            self.pattern
                .split(text)
                .filter(|gap| !gap.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            self.pattern
                .find_iter(text)
                .map(|mat| mat.as_str().to_string())
                .collect()
        };

        Box::new(words.into_iter())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
