//! Schema-less JSON records and the object tokenizer.
//!
//! - [`record::JsonRecord`] - One parsed JSON object with its identifier
//! - [`tokenize::tokenize_object`] - Lazy `FIELD:WORD` tokens for one object

pub mod record;
pub mod tokenize;

pub use record::{JsonRecord, field_text, value_text};
pub use tokenize::{FieldTokens, tokenize_object};
