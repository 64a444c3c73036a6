//! Unicode word splitter implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29), keeping only
//! segments that contain at least one alphanumeric character.
//!
//! # Examples
//!
//! ```
//! use jsontok::analysis::splitter::Splitter;
//! use jsontok::analysis::splitter::unicode_word::UnicodeWordSplitter;
//!
//! let splitter = UnicodeWordSplitter::new();
//! let words: Vec<String> = splitter.split("Hello, world! can't stop").collect();
//! assert_eq!(words, vec!["Hello", "world", "can't", "stop"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use super::{Splitter, WordStream};

/// A splitter that divides text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordSplitter;

impl UnicodeWordSplitter {
    /// Create a new Unicode word splitter.
    pub fn new() -> Self {
        UnicodeWordSplitter
    }
}

impl Splitter for UnicodeWordSplitter {
    fn split(&self, text: &str) -> WordStream {
        let words: Vec<String> = text.unicode_words().map(str::to_string).collect();
        Box::new(words.into_iter())
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
