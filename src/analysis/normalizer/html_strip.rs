//! HTML strip normalizer implementation.
//!
//! Parses the input as an HTML fragment and keeps only its text nodes,
//! concatenated with no separator. The html5ever parser behind `scraper`
//! recovers from malformed markup instead of failing, so stray `<`, unclosed
//! tags and bogus entities all degrade to best-effort text.

use scraper::Html;

use super::Normalizer;

/// A normalizer that removes markup tags, keeping their text content.
///
/// # Examples
///
/// ```
/// use jsontok::analysis::normalizer::Normalizer;
/// use jsontok::analysis::normalizer::html_strip::HtmlStripNormalizer;
///
/// let normalizer = HtmlStripNormalizer::new();
/// assert_eq!(normalizer.normalize("<p>Hello <b>world</b></p>"), "Hello world");
/// assert_eq!(normalizer.normalize("fish &amp; chips"), "fish & chips");
/// ```
#[derive(Clone, Debug, Default)]
pub struct HtmlStripNormalizer;

impl HtmlStripNormalizer {
    /// Create a new HTML strip normalizer.
    pub fn new() -> Self {
        HtmlStripNormalizer
    }
}

impl Normalizer for HtmlStripNormalizer {
    fn normalize(&self, input: &str) -> String {
        // Plain text never needs the parser.
        if !input.contains('<') && !input.contains('&') {
            return input.to_string();
        }

        let fragment = Html::parse_fragment(input);
        fragment.root_element().text().collect()
    }

    fn name(&self) -> &'static str {
        "html_strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        let normalizer = HtmlStripNormalizer::new();
        assert_eq!(
            normalizer.normalize("<div><h1>Title</h1><p>Body text</p></div>"),
            "TitleBody text"
        );
    }

    #[test]
    fn test_plain_text_passthrough() {
        let normalizer = HtmlStripNormalizer::new();
        assert_eq!(normalizer.normalize("no markup here"), "no markup here");
        assert_eq!(normalizer.normalize(""), "");
    }

    #[test]
    fn test_malformed_markup() {
        let normalizer = HtmlStripNormalizer::new();
        assert_eq!(normalizer.normalize("<p>unclosed <b>bold"), "unclosed bold");
        assert_eq!(normalizer.normalize("1 < 2"), "1 < 2");
        assert_eq!(normalizer.normalize("</stray>text"), "text");
    }

    #[test]
    fn test_entities_decoded() {
        let normalizer = HtmlStripNormalizer::new();
        assert_eq!(normalizer.normalize("a&nbsp;b"), "a\u{a0}b");
        assert_eq!(normalizer.normalize("&lt;tag&gt;"), "<tag>");
    }

    #[test]
    fn test_normalizer_name() {
        assert_eq!(HtmlStripNormalizer::new().name(), "html_strip");
    }
}
