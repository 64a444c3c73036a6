//! Error types for the jsontok library.
//!
//! Tokenization itself never fails and per-file failures during a directory
//! walk are reported as [`ParseOutcome::Failed`](crate::corpus::walker::ParseOutcome)
//! values, not errors. [`JsontokError`] covers the edges: building a
//! tokenizer configuration from settings and writing CLI output.
//!
//! # Examples
//!
//! ```
//! use jsontok::error::{JsontokError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(JsontokError::config("unknown splitter"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for jsontok operations.
#[derive(Error, Debug)]
pub enum JsontokError {
    /// I/O errors (settings files, output streams)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (invalid settings, bad regex patterns)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with JsontokError.
pub type Result<T> = std::result::Result<T, JsontokError>;

impl JsontokError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        JsontokError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        JsontokError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        JsontokError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        JsontokError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
