//! Normalizer implementations for text cleanup.
//!
//! Normalizers run over a field's stringified value before it is handed to a
//! [`Splitter`](crate::analysis::splitter::Splitter). Each one is a pure
//! `&str -> String` transform, so they compose freely.
//!
//! # Available Normalizers
//!
//! - [`lowercase::LowercaseNormalizer`] - Unicode lowercasing
//! - [`html_strip::HtmlStripNormalizer`] - Keeps only the text content of markup
//! - [`pattern_replace::PatternReplaceNormalizer`] - Regex-based replacement
//! - [`PipelineNormalizer`] - Applies a chain of normalizers in order
//!
//! The default pipeline ([`PipelineNormalizer::standard`]) lowercases, strips
//! markup, then collapses punctuation into single spaces.
//!
//! # Examples
//!
//! ```
//! use jsontok::analysis::normalizer::{Normalizer, PipelineNormalizer};
//!
//! let normalizer = PipelineNormalizer::standard();
//! assert_eq!(normalizer.normalize("<p>Hello, <b>World</b>!</p>"), "hello world");
//! ```

use std::fmt;
use std::sync::Arc;

/// Trait for normalizers that transform text before splitting.
///
/// Any `Fn(&str) -> String + Send + Sync` closure is also a normalizer, so a
/// caller can substitute an ad hoc transform without declaring a type.
///
/// # Examples
///
/// ```
/// use jsontok::analysis::normalizer::Normalizer;
///
/// let shout = |s: &str| s.to_uppercase();
/// assert_eq!(shout.normalize("abc"), "ABC");
/// assert_eq!(shout.name(), "custom");
/// ```
pub trait Normalizer: Send + Sync {
    /// Apply this normalizer to the input text.
    fn normalize(&self, input: &str) -> String;

    /// Get the name of this normalizer.
    fn name(&self) -> &'static str;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn normalize(&self, input: &str) -> String {
        self(input)
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}

pub mod html_strip;
pub mod lowercase;
pub mod pattern_replace;

pub use html_strip::HtmlStripNormalizer;
pub use lowercase::LowercaseNormalizer;
pub use pattern_replace::PatternReplaceNormalizer;

/// A normalizer that applies a chain of normalizers in sequence.
#[derive(Clone, Default)]
pub struct PipelineNormalizer {
    stages: Vec<Arc<dyn Normalizer>>,
}

impl PipelineNormalizer {
    /// Create an empty pipeline. An empty pipeline returns its input unchanged.
    pub fn new() -> Self {
        PipelineNormalizer { stages: Vec::new() }
    }

    /// The default pipeline: lowercase, strip markup, strip punctuation.
    ///
    /// A second lowercase stage runs last because entity decoding can
    /// reintroduce uppercase letters (`&#65;` is `A`).
    pub fn standard() -> Self {
        PipelineNormalizer::new()
            .add_stage(Arc::new(LowercaseNormalizer::new()))
            .add_stage(Arc::new(HtmlStripNormalizer::new()))
            .add_stage(Arc::new(PatternReplaceNormalizer::punctuation()))
            .add_stage(Arc::new(LowercaseNormalizer::new()))
    }

    /// Append a stage to the pipeline.
    pub fn add_stage(mut self, stage: Arc<dyn Normalizer>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Get the stages of this pipeline.
    pub fn stages(&self) -> &[Arc<dyn Normalizer>] {
        &self.stages
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl fmt::Debug for PipelineNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.stages.iter().map(|s| s.name()).collect();
        f.debug_struct("PipelineNormalizer")
            .field("stages", &names)
            .finish()
    }
}

impl Normalizer for PipelineNormalizer {
    fn normalize(&self, input: &str) -> String {
        let mut text = input.to_string();
        for stage in &self.stages {
            text = stage.normalize(&text);
        }
        text
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pipeline() {
        let normalizer = PipelineNormalizer::standard();
        assert_eq!(
            normalizer.normalize("The <em>Quick</em>, brown fox!"),
            "the quick brown fox"
        );
        assert_eq!(normalizer.normalize("snake_case--and   spaces"), "snake case and spaces");
        assert_eq!(normalizer.normalize(""), "");
    }

    #[test]
    fn test_standard_pipeline_is_idempotent() {
        let normalizer = PipelineNormalizer::standard();
        let inputs = [
            "Hello, World!",
            "<div>Nested <span>Markup &amp; entities</span></div>",
            "  leading and trailing  ",
            "Ünïcödé Straße 42",
            "a < b > c",
            "___",
            "<p>unclosed <b>tags",
            "&#65;pple",
            "CAF&#201;",
            "&Uuml;ber &#x4E;ICE",
        ];

        for input in inputs {
            let once = normalizer.normalize(input);
            let twice = normalizer.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_decoded_entities_are_lowercased() {
        let normalizer = PipelineNormalizer::standard();
        assert_eq!(normalizer.normalize("&#65;pple"), "apple");
        assert_eq!(normalizer.normalize("CAF&#201;"), "café");
        assert_eq!(normalizer.normalize("<b>&Uuml;ber</b>"), "über");
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let normalizer = PipelineNormalizer::new();
        assert!(normalizer.is_empty());
        assert_eq!(normalizer.normalize("Keep <b>This</b>"), "Keep <b>This</b>");
    }

    #[test]
    fn test_closure_stage() {
        let normalizer = PipelineNormalizer::new()
            .add_stage(Arc::new(|s: &str| s.replace('-', "")))
            .add_stage(Arc::new(LowercaseNormalizer::new()));

        assert_eq!(normalizer.normalize("A-B-C"), "abc");
        assert_eq!(normalizer.stages()[0].name(), "custom");
    }

    #[test]
    fn test_debug_lists_stage_names() {
        let debug = format!("{:?}", PipelineNormalizer::standard());
        assert!(debug.contains("lowercase"));
        assert!(debug.contains("html_strip"));
        assert!(debug.contains("pattern_replace"));
    }
}
