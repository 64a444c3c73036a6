//! Text analysis for jsontok.
//!
//! This module provides the pieces of the tokenization pipeline: normalizers
//! that clean a field value, splitters that break it into words, the
//! field-qualified token type, and the configuration bundling them.

pub mod config;
pub mod normalizer;
pub mod splitter;
pub mod token;

// Re-export commonly used types
pub use config::*;
pub use normalizer::Normalizer;
pub use splitter::Splitter;
pub use token::*;
