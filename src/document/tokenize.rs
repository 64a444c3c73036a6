//! Object tokenizer.
//!
//! Turns one JSON object into a lazy stream of [`FieldToken`]s. Fields are
//! visited in the configuration's order, or in the object's own key order
//! when the configuration has no field list. Each field value is coerced to
//! text, normalized and split; every resulting word becomes one token.
//!
//! Work happens one field at a time as the iterator is advanced, so a caller
//! that stops early never pays for the remaining fields.
//!
//! # Examples
//!
//! ```
//! use jsontok::analysis::config::TokenizerConfig;
//! use jsontok::document::tokenize::tokenize_object;
//! use serde_json::json;
//!
//! let value = json!({"title": "Cat <b>Dog</b>", "body": "Hello, world!"});
//! let object = value.as_object().unwrap();
//!
//! let config = TokenizerConfig::default();
//! let tokens: Vec<String> = tokenize_object(object, &config)
//!     .map(|token| token.to_string())
//!     .collect();
//! assert_eq!(tokens, vec!["title:cat", "title:dog", "body:hello", "body:world"]);
//! ```

use std::iter::FusedIterator;

use serde_json::{Map, Value};

use crate::analysis::config::TokenizerConfig;
use crate::analysis::splitter::WordStream;
use crate::analysis::token::FieldToken;
use crate::document::record::field_text;

/// Tokenize a JSON object according to a configuration.
pub fn tokenize_object<'a>(
    object: &'a Map<String, Value>,
    config: &'a TokenizerConfig,
) -> FieldTokens<'a> {
    let fields = match config.fields() {
        Some(fields) => FieldCursor::Configured(fields.iter()),
        None => FieldCursor::Keys(object.keys()),
    };

    FieldTokens {
        object,
        config,
        fields,
        current: None,
    }
}

/// Which fields remain to be visited.
enum FieldCursor<'a> {
    Configured(std::slice::Iter<'a, String>),
    Keys(serde_json::map::Keys<'a>),
}

impl<'a> Iterator for FieldCursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            FieldCursor::Configured(iter) => iter.next().map(String::as_str),
            FieldCursor::Keys(iter) => iter.next().map(String::as_str),
        }
    }
}

/// Lazy iterator over the tokens of one JSON object.
///
/// Finite and not restartable; call [`tokenize_object`] again for a fresh
/// pass.
pub struct FieldTokens<'a> {
    object: &'a Map<String, Value>,
    config: &'a TokenizerConfig,
    fields: FieldCursor<'a>,
    current: Option<(&'a str, WordStream)>,
}

impl Iterator for FieldTokens<'_> {
    type Item = FieldToken;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((field, words)) = &mut self.current
                && let Some(word) = words.next()
            {
                return Some(FieldToken::new(*field, word));
            }

            // Current field exhausted; move on, or finish when none remain.
            let field = match self.fields.next() {
                Some(field) => field,
                None => {
                    self.current = None;
                    return None;
                }
            };

            let text = field_text(self.object, field);
            let normalized = self.config.normalizer().normalize(&text);
            self.current = Some((field, self.config.splitter().split(&normalized)));
        }
    }
}

impl FusedIterator for FieldTokens<'_> {}
