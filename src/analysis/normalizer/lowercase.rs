//! Lowercase normalizer implementation.

use super::Normalizer;

/// A normalizer that converts text to lowercase.
///
/// ASCII input takes the cheap byte-wise path; everything else goes through
/// Unicode-aware lowercasing.
///
/// # Examples
///
/// ```
/// use jsontok::analysis::normalizer::Normalizer;
/// use jsontok::analysis::normalizer::lowercase::LowercaseNormalizer;
///
/// let normalizer = LowercaseNormalizer::new();
/// assert_eq!(normalizer.normalize("Hello WORLD"), "hello world");
/// assert_eq!(normalizer.normalize("ÉCOLE"), "école");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseNormalizer;

impl LowercaseNormalizer {
    /// Create a new lowercase normalizer.
    pub fn new() -> Self {
        LowercaseNormalizer
    }
}

impl Normalizer for LowercaseNormalizer {
    fn normalize(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
