//! Corpus-wide consumers of a directory walk.
//!
//! Three independent passes over a [`JsonDirectory`]:
//!
//! - [`tokenize_directory`] - one [`TokenizedRecord`] per parsed file
//! - [`token_counts`] - how often each `FIELD:WORD` token occurs
//! - [`field_counts`] - how many records carry each top-level key
//!
//! Files that fail to parse are skipped by all three. The `*_with_stats`
//! variants and [`TokenizedRecords::stats`] report how many were skipped.
//!
//! # Examples
//!
//! ```no_run
//! use jsontok::analysis::config::TokenizerConfig;
//! use jsontok::corpus::aggregate::{field_counts, token_counts};
//! use jsontok::corpus::walker::JsonDirectory;
//!
//! let directory = JsonDirectory::new("corpus/");
//! let config = TokenizerConfig::builder().fields(["title"]).build();
//!
//! for (token, count) in token_counts(&directory, &config).most_common(Some(10)) {
//!     println!("{token}\t{count}");
//! }
//! println!("{:?}", field_counts(&directory).sorted());
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::config::TokenizerConfig;
use crate::corpus::counter::Counter;
use crate::corpus::walker::{JsonDirectory, JsonDirectoryIter, ParseOutcome};

/// The tokens of one record, labelled with a caller-supplied class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedRecord {
    /// Label attached to every record of the pass
    pub classification: String,
    /// The record's `identifier` field, `""` when absent
    pub identifier: String,
    /// `FIELD:WORD` tokens in field order, then word order
    pub tokens: Vec<String>,
}

/// How many files a pass parsed and how many it skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub parsed: usize,
    pub failed: usize,
}

impl CorpusStats {
    /// Tally one outcome.
    pub fn observe(&mut self, outcome: &ParseOutcome) {
        if outcome.is_parsed() {
            self.parsed += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Number of files visited.
    pub fn total(&self) -> usize {
        self.parsed + self.failed
    }
}

/// Tokenize every parsed file of a directory, labelling each with `classification`.
pub fn tokenize_directory<'a, S: Into<String>>(
    classification: S,
    directory: &JsonDirectory,
    config: &'a TokenizerConfig,
) -> TokenizedRecords<'a> {
    TokenizedRecords {
        classification: classification.into(),
        outcomes: directory.outcomes(),
        config,
        stats: CorpusStats::default(),
    }
}

/// Lazy iterator produced by [`tokenize_directory`].
pub struct TokenizedRecords<'a> {
    classification: String,
    outcomes: JsonDirectoryIter,
    config: &'a TokenizerConfig,
    stats: CorpusStats,
}

impl TokenizedRecords<'_> {
    /// Counts of the outcomes consumed so far.
    pub fn stats(&self) -> CorpusStats {
        self.stats
    }

    pub fn classification(&self) -> &str {
        &self.classification
    }
}

impl Iterator for TokenizedRecords<'_> {
    type Item = TokenizedRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let outcome = self.outcomes.next()?;
            self.stats.observe(&outcome);

            let Some(record) = outcome.into_record() else {
                continue;
            };

            let tokens: Vec<String> = record.tokens(self.config).map(String::from).collect();
            debug!(
                "Tokenized {} ({} tokens)",
                record.path().display(),
                tokens.len()
            );

            let (identifier, _) = record.into_parts();
            return Some(TokenizedRecord {
                classification: self.classification.clone(),
                identifier,
                tokens,
            });
        }
    }
}

/// Count every token of every parsed file.
pub fn token_counts(directory: &JsonDirectory, config: &TokenizerConfig) -> Counter {
    token_counts_with_stats(directory, config).0
}

/// [`token_counts`], also reporting parsed and failed file counts.
pub fn token_counts_with_stats(
    directory: &JsonDirectory,
    config: &TokenizerConfig,
) -> (Counter, CorpusStats) {
    let mut counter = Counter::new();
    let mut stats = CorpusStats::default();

    for outcome in directory {
        stats.observe(&outcome);
        if let Some(record) = outcome.record() {
            for token in record.tokens(config) {
                counter.increment(&token.to_string());
            }
        }
    }

    info!(
        "Counted {} distinct tokens in {} files ({} failed)",
        counter.len(),
        stats.parsed,
        stats.failed
    );
    (counter, stats)
}

/// Count, for each top-level key, the parsed files that contain it.
///
/// Ignores any field allowlist: this is corpus-wide field discovery.
pub fn field_counts(directory: &JsonDirectory) -> Counter {
    field_counts_with_stats(directory).0
}

/// [`field_counts`], also reporting parsed and failed file counts.
pub fn field_counts_with_stats(directory: &JsonDirectory) -> (Counter, CorpusStats) {
    let mut counter = Counter::new();
    let mut stats = CorpusStats::default();

    for outcome in directory {
        stats.observe(&outcome);
        if let Some(record) = outcome.record() {
            counter.extend(record.keys());
        }
    }

    info!(
        "Counted {} distinct fields in {} files ({} failed)",
        counter.len(),
        stats.parsed,
        stats.failed
    );
    (counter, stats)
}
