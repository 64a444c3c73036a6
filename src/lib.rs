//! # jsontok
//!
//! Field-qualified tokenization for directories of JSON documents.
//!
//! Each file under a root directory is parsed as one JSON object; selected
//! fields are normalized (lowercased, stripped of markup and punctuation),
//! split into words, and emitted as `FIELD:WORD` tokens. On top of that sit
//! corpus-wide token and field frequency counts.
//!
//! ## Features
//!
//! - Pluggable normalizers and splitters, including plain closures
//! - Lazy, single-pass processing: one file in memory at a time
//! - Per-file error isolation: a bad file is reported, never fatal
//! - Token and field frequency counters
//!
//! ## Example
//!
//! ```no_run
//! use jsontok::prelude::*;
//!
//! let directory = JsonDirectory::new("corpus/");
//! let config = TokenizerConfig::builder().fields(["title", "body"]).build();
//!
//! for record in tokenize_directory("news", &directory, &config) {
//!     println!("{} {}", record.identifier, record.tokens.join(" "));
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod document;
pub mod error;

pub mod prelude {
    pub use crate::analysis::config::{TokenizerConfig, TokenizerSettings};
    pub use crate::analysis::normalizer::{Normalizer, PipelineNormalizer};
    pub use crate::analysis::splitter::Splitter;
    pub use crate::analysis::token::FieldToken;
    pub use crate::corpus::aggregate::{
        TokenizedRecord, field_counts, token_counts, tokenize_directory,
    };
    pub use crate::corpus::counter::Counter;
    pub use crate::corpus::walker::{JsonDirectory, ParseOutcome};
    pub use crate::document::record::JsonRecord;
    pub use crate::document::tokenize::tokenize_object;
    pub use crate::error::{JsontokError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
