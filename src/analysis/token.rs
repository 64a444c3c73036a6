//! Field-qualified token type.
//!
//! Every word produced from a JSON field is tagged with the name of the field
//! it came from. A [`FieldToken`] renders as `FIELD:WORD`, which is the form
//! downstream consumers (classifiers, frequency tables) key on.
//!
//! # Examples
//!
//! ```
//! use jsontok::analysis::token::FieldToken;
//!
//! let token = FieldToken::new("title", "rust");
//! assert_eq!(token.to_string(), "title:rust");
//!
//! let parsed: FieldToken = "body:hello".parse().unwrap();
//! assert_eq!(parsed.field, "body");
//! assert_eq!(parsed.word, "hello");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::JsontokError;

/// Separator between the field name and the word.
pub const FIELD_SEPARATOR: char = ':';

/// A single word tagged with its source field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldToken {
    /// The JSON field the word was taken from
    pub field: String,

    /// One normalized, split unit of the field's value (may be empty)
    pub word: String,
}

impl FieldToken {
    /// Create a new token from a field name and a word.
    pub fn new<F: Into<String>, W: Into<String>>(field: F, word: W) -> Self {
        FieldToken {
            field: field.into(),
            word: word.into(),
        }
    }

    /// Check if the word half of this token is empty.
    pub fn is_empty_word(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for FieldToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, FIELD_SEPARATOR, self.word)
    }
}

impl From<FieldToken> for String {
    fn from(token: FieldToken) -> Self {
        token.to_string()
    }
}

impl FromStr for FieldToken {
    type Err = JsontokError;

    /// Parse `FIELD:WORD`, splitting on the first separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(FIELD_SEPARATOR) {
            Some((field, word)) if !field.is_empty() => Ok(FieldToken::new(field, word)),
            _ => Err(JsontokError::analysis(format!(
                "Token '{s}' is not of the form FIELD:WORD"
            ))),
        }
    }
}

impl Serialize for FieldToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
