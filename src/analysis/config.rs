//! Tokenizer configuration.
//!
//! A [`TokenizerConfig`] bundles the three substitutable parts of the
//! tokenization pipeline: the normalizer applied to each field value, the
//! splitter that turns the normalized value into words, and an optional
//! allowlist of fields. One configuration is built up front and shared by
//! every record of a directory pass.
//!
//! [`TokenizerSettings`] is the serializable counterpart used by the CLI and
//! by settings files; it describes a configuration built only from the
//! provided normalizers and splitters.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use jsontok::analysis::config::TokenizerConfig;
//! use jsontok::analysis::splitter::WhitespaceSplitter;
//!
//! // Default: lowercase, strip markup and punctuation, split on ' ', all fields
//! let config = TokenizerConfig::default();
//! assert!(config.fields().is_none());
//!
//! // Restrict to two fields and split on any whitespace
//! let config = TokenizerConfig::builder()
//!     .fields(["title", "body"])
//!     .splitter(Arc::new(WhitespaceSplitter::new()))
//!     .build();
//! assert_eq!(config.fields().unwrap(), ["title", "body"]);
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{
    HtmlStripNormalizer, LowercaseNormalizer, Normalizer, PatternReplaceNormalizer,
    PipelineNormalizer,
};
use crate::analysis::splitter::{
    RegexSplitter, SpaceSplitter, Splitter, UnicodeWordSplitter, WhitespaceSplitter,
};
use crate::error::{JsontokError, Result};

/// Immutable configuration for tokenizing JSON objects.
#[derive(Clone)]
pub struct TokenizerConfig {
    splitter: Arc<dyn Splitter>,
    normalizer: Arc<dyn Normalizer>,
    fields: Option<Vec<String>>,
}

impl TokenizerConfig {
    /// Create a configuration from its three parts.
    pub fn new(
        splitter: Arc<dyn Splitter>,
        normalizer: Arc<dyn Normalizer>,
        fields: Option<Vec<String>>,
    ) -> Self {
        TokenizerConfig {
            splitter,
            normalizer,
            fields: fields.map(dedup_fields),
        }
    }

    /// Start building a configuration from the defaults.
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::default()
    }

    /// The splitter applied after normalization.
    pub fn splitter(&self) -> &dyn Splitter {
        self.splitter.as_ref()
    }

    /// The normalizer applied to each field value.
    pub fn normalizer(&self) -> &dyn Normalizer {
        self.normalizer.as_ref()
    }

    /// The field allowlist, or `None` to use every field of each object.
    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }

    /// Return a copy of this configuration restricted to the given fields.
    pub fn with_fields<I, S>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TokenizerConfig {
            splitter: Arc::clone(&self.splitter),
            normalizer: Arc::clone(&self.normalizer),
            fields: Some(dedup_fields(fields.into_iter().map(Into::into).collect())),
        }
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            splitter: Arc::new(SpaceSplitter::new()),
            normalizer: Arc::new(PipelineNormalizer::standard()),
            fields: None,
        }
    }
}

impl fmt::Debug for TokenizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenizerConfig")
            .field("splitter", &self.splitter.name())
            .field("normalizer", &self.normalizer.name())
            .field("fields", &self.fields)
            .finish()
    }
}

/// Drop repeated field names, keeping the first occurrence.
fn dedup_fields(fields: Vec<String>) -> Vec<String> {
    let mut seen = ahash::AHashSet::with_capacity(fields.len());
    fields
        .into_iter()
        .filter(|field| seen.insert(field.clone()))
        .collect()
}

/// Builder for [`TokenizerConfig`]. Building never fails.
#[derive(Default)]
pub struct TokenizerConfigBuilder {
    splitter: Option<Arc<dyn Splitter>>,
    normalizer: Option<Arc<dyn Normalizer>>,
    fields: Option<Vec<String>>,
}

impl TokenizerConfigBuilder {
    /// Replace the default space splitter.
    pub fn splitter(mut self, splitter: Arc<dyn Splitter>) -> Self {
        self.splitter = Some(splitter);
        self
    }

    /// Replace the default normalizer pipeline.
    pub fn normalizer(mut self, normalizer: Arc<dyn Normalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Restrict tokenization to the given fields, in the given order.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Use every field of each object.
    pub fn all_fields(mut self) -> Self {
        self.fields = None;
        self
    }

    pub fn build(self) -> TokenizerConfig {
        let defaults = TokenizerConfig::default();
        TokenizerConfig::new(
            self.splitter.unwrap_or(defaults.splitter),
            self.normalizer.unwrap_or(defaults.normalizer),
            self.fields,
        )
    }
}

/// Splitter choices available from settings files and the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitterKind {
    /// Split on each literal space
    #[default]
    Space,
    /// Split on runs of whitespace
    Whitespace,
    /// Split on Unicode word boundaries
    UnicodeWord,
    /// Extract matches of `pattern`
    Regex,
}

/// Serializable description of a [`TokenizerConfig`].
///
/// Missing keys in a settings file take their default values, so `{}` is a
/// valid settings file describing the default configuration.
///
/// ```
/// use jsontok::analysis::config::{SplitterKind, TokenizerSettings};
///
/// let settings: TokenizerSettings =
///     serde_json::from_str(r#"{"fields": ["title"], "splitter": "whitespace"}"#).unwrap();
/// assert_eq!(settings.splitter, SplitterKind::Whitespace);
/// assert!(settings.lowercase);
///
/// let config = settings.build().unwrap();
/// assert_eq!(config.fields().unwrap(), ["title"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerSettings {
    /// Field allowlist; `None` tokenizes every field.
    pub fields: Option<Vec<String>>,
    /// Lowercase values, including text decoded from markup entities.
    pub lowercase: bool,
    /// Keep only the text content of markup.
    pub strip_html: bool,
    /// Collapse punctuation runs into single spaces.
    pub strip_punctuation: bool,
    /// Which splitter to use.
    pub splitter: SplitterKind,
    /// Pattern for [`SplitterKind::Regex`].
    pub pattern: Option<String>,
}

impl Default for TokenizerSettings {
    fn default() -> Self {
        TokenizerSettings {
            fields: None,
            lowercase: true,
            strip_html: true,
            strip_punctuation: true,
            splitter: SplitterKind::Space,
            pattern: None,
        }
    }
}

impl TokenizerSettings {
    /// Load settings from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            JsontokError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Build the normalizer pipeline these settings describe.
    pub fn normalizer(&self) -> PipelineNormalizer {
        let mut pipeline = PipelineNormalizer::new();
        if self.lowercase {
            pipeline = pipeline.add_stage(Arc::new(LowercaseNormalizer::new()));
        }
        if self.strip_html {
            pipeline = pipeline.add_stage(Arc::new(HtmlStripNormalizer::new()));
        }
        if self.strip_punctuation {
            pipeline = pipeline.add_stage(Arc::new(PatternReplaceNormalizer::punctuation()));
        }
        if self.lowercase && self.strip_html {
            // Decoded entities may be uppercase.
            pipeline = pipeline.add_stage(Arc::new(LowercaseNormalizer::new()));
        }
        pipeline
    }

    /// Build the splitter these settings describe.
    pub fn splitter(&self) -> Result<Arc<dyn Splitter>> {
        let splitter: Arc<dyn Splitter> = match self.splitter {
            SplitterKind::Space => Arc::new(SpaceSplitter::new()),
            SplitterKind::Whitespace => Arc::new(WhitespaceSplitter::new()),
            SplitterKind::UnicodeWord => Arc::new(UnicodeWordSplitter::new()),
            SplitterKind::Regex => match &self.pattern {
                Some(pattern) => Arc::new(RegexSplitter::with_pattern(pattern)?),
                None => Arc::new(RegexSplitter::new()?),
            },
        };
        Ok(splitter)
    }

    /// Build a [`TokenizerConfig`]. Fails only on an invalid regex pattern.
    pub fn build(&self) -> Result<TokenizerConfig> {
        Ok(TokenizerConfig::new(
            self.splitter()?,
            Arc::new(self.normalizer()),
            self.fields.clone(),
        ))
    }
}
