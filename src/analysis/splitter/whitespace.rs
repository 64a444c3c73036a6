//! Whitespace splitter implementation.

use super::{Splitter, WordStream};

/// A splitter that divides text on runs of Unicode whitespace.
///
/// Never yields empty words, which makes it the safer choice when pairing
/// with a normalizer that does not collapse spacing.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceSplitter;

impl WhitespaceSplitter {
    /// Create a new whitespace splitter.
    pub fn new() -> Self {
        WhitespaceSplitter
    }
}

impl Splitter for WhitespaceSplitter {
    fn split(&self, text: &str) -> WordStream {
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        Box::new(words.into_iter())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
