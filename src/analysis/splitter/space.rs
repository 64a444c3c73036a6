//! Single-space splitter implementation.

use super::{Splitter, WordStream};

/// A splitter that divides text on every literal space character.
///
/// Unlike [`WhitespaceSplitter`](super::WhitespaceSplitter) it does not
/// collapse runs: consecutive, leading or trailing spaces produce empty
/// words, and an empty input produces a single empty word.
#[derive(Clone, Debug, Default)]
pub struct SpaceSplitter;

impl SpaceSplitter {
    /// Create a new space splitter.
    pub fn new() -> Self {
        SpaceSplitter
    }
}

impl Splitter for SpaceSplitter {
    fn split(&self, text: &str) -> WordStream {
        let words: Vec<String> = text.split(' ').map(str::to_string).collect();
        Box::new(words.into_iter())
    }

    fn name(&self) -> &'static str {
        "space"
    }
}
