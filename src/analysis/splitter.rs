//! Splitter implementations for breaking normalized text into words.
//!
//! A splitter receives a field value after normalization and returns the
//! ordered words that become the `WORD` half of each `FIELD:WORD` token.
//!
//! # Available Splitters
//!
//! - [`space::SpaceSplitter`] - Splits on every literal `' '` (the default)
//! - [`whitespace::WhitespaceSplitter`] - Splits on runs of whitespace
//! - [`regex::RegexSplitter`] - Custom regex-based splitting
//! - [`unicode_word::UnicodeWordSplitter`] - Uses Unicode word boundaries
//!
//! The default [`space::SpaceSplitter`] keeps empty words: `"a  b"` splits into
//! `["a", "", "b"]`. The default normalizer collapses whitespace runs first,
//! so this only shows up when one of the two is swapped out.
//!
//! # Examples
//!
//! ```
//! use jsontok::analysis::splitter::Splitter;
//! use jsontok::analysis::splitter::space::SpaceSplitter;
//!
//! let splitter = SpaceSplitter::new();
//! let words: Vec<String> = splitter.split("hello world").collect();
//! assert_eq!(words, vec!["hello", "world"]);
//! ```

/// Type alias for a boxed iterator of words.
pub type WordStream = Box<dyn Iterator<Item = String> + Send>;

/// Trait for splitters that divide text into an ordered sequence of words.
///
/// Any `Fn(&str) -> Vec<String> + Send + Sync` closure is also a splitter.
///
/// # Examples
///
/// ```
/// use jsontok::analysis::splitter::Splitter;
///
/// let commas = |s: &str| s.split(',').map(str::to_string).collect::<Vec<_>>();
/// let words: Vec<String> = commas.split("a,b,,c").collect();
/// assert_eq!(words, vec!["a", "b", "", "c"]);
/// ```
pub trait Splitter: Send + Sync {
    /// Split the given text into words.
    fn split(&self, text: &str) -> WordStream;

    /// Get the name of this splitter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

impl<F> Splitter for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn split(&self, text: &str) -> WordStream {
        Box::new(self(text).into_iter())
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}

pub mod regex;
pub mod space;
pub mod unicode_word;
pub mod whitespace;

pub use self::regex::RegexSplitter;
pub use space::SpaceSplitter;
pub use unicode_word::UnicodeWordSplitter;
pub use whitespace::WhitespaceSplitter;
