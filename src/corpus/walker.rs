//! Directory walker.
//!
//! [`JsonDirectory`] recursively enumerates every file under a root and
//! tries to read each one as a single JSON object. Every file produces
//! exactly one [`ParseOutcome`]: either the parsed [`JsonRecord`] or a
//! failure marker. A bad file never stops the walk.
//!
//! Failures keep the offending path and a coarse [`FailureKind`], but not
//! the underlying error. Each file is read into memory and its handle closed
//! before parsing, so dropping the iterator at any point leaves nothing open.
//!
//! # Examples
//!
//! ```no_run
//! use jsontok::corpus::walker::{JsonDirectory, ParseOutcome};
//!
//! for outcome in &JsonDirectory::new("corpus/") {
//!     match outcome {
//!         ParseOutcome::Parsed(record) => println!("{}", record.identifier()),
//!         ParseOutcome::Failed { path, kind } => eprintln!("{}: {kind}", path.display()),
//!     }
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use walkdir::WalkDir;

use crate::document::record::JsonRecord;

/// Why a file did not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The file could not be opened or read
    Unreadable,
    /// The content is not valid JSON
    MalformedJson,
    /// Valid JSON whose top-level value is not an object
    NotAnObject,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FailureKind::Unreadable => "unreadable file",
            FailureKind::MalformedJson => "malformed JSON",
            FailureKind::NotAnObject => "top-level value is not an object",
        };
        f.write_str(text)
    }
}

/// The result of reading one file.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The file held a JSON object
    Parsed(JsonRecord),
    /// The file could not be turned into a record
    Failed { path: PathBuf, kind: FailureKind },
}

impl ParseOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ParseOutcome::Failed { .. })
    }

    /// The file this outcome belongs to.
    pub fn path(&self) -> &Path {
        match self {
            ParseOutcome::Parsed(record) => record.path(),
            ParseOutcome::Failed { path, .. } => path,
        }
    }

    /// Borrow the record of a successful outcome.
    pub fn record(&self) -> Option<&JsonRecord> {
        match self {
            ParseOutcome::Parsed(record) => Some(record),
            ParseOutcome::Failed { .. } => None,
        }
    }

    /// Take the record of a successful outcome.
    pub fn into_record(self) -> Option<JsonRecord> {
        match self {
            ParseOutcome::Parsed(record) => Some(record),
            ParseOutcome::Failed { .. } => None,
        }
    }
}

/// Read and parse a single file.
pub fn read_outcome(path: &Path) -> ParseOutcome {
    let failed = |kind: FailureKind| ParseOutcome::Failed {
        path: path.to_path_buf(),
        kind,
    };

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Skipping {}: {e}", path.display());
            return failed(FailureKind::Unreadable);
        }
    };

    let value: Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => {
            debug!("Skipping {}: {e}", path.display());
            return failed(FailureKind::MalformedJson);
        }
    };

    match JsonRecord::from_value(path, value) {
        Some(record) => ParseOutcome::Parsed(record),
        None => {
            debug!("Skipping {}: top-level value is not an object", path.display());
            failed(FailureKind::NotAnObject)
        }
    }
}

/// A directory tree of JSON files.
#[derive(Debug, Clone)]
pub struct JsonDirectory {
    root: PathBuf,
    follow_links: bool,
    extension: Option<String>,
}

impl JsonDirectory {
    /// Walk every file under `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        JsonDirectory {
            root: root.into(),
            follow_links: false,
            extension: None,
        }
    }

    /// Descend into symlinked directories. Symlinked files are always read.
    pub fn follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Only visit files with the given extension (without the dot).
    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a walk. Each call starts over from the root.
    pub fn outcomes(&self) -> JsonDirectoryIter {
        JsonDirectoryIter {
            entries: WalkDir::new(&self.root)
                .follow_links(self.follow_links)
                .into_iter(),
            extension: self.extension.clone(),
        }
    }

    /// Walk, keeping only successfully parsed records.
    pub fn records(&self) -> impl Iterator<Item = JsonRecord> + use<> {
        self.outcomes().filter_map(ParseOutcome::into_record)
    }
}

impl IntoIterator for &JsonDirectory {
    type Item = ParseOutcome;
    type IntoIter = JsonDirectoryIter;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes()
    }
}

/// Iterator over the parse outcomes of a directory walk.
pub struct JsonDirectoryIter {
    entries: walkdir::IntoIter,
    extension: Option<String>,
}

impl JsonDirectoryIter {
    fn wants(&self, path: &Path) -> bool {
        match &self.extension {
            Some(wanted) => path
                .extension()
                .is_some_and(|ext| ext.to_string_lossy() == wanted.as_str()),
            None => true,
        }
    }

    /// The file a walk error belongs to, if it belongs to a file at all.
    ///
    /// With `follow_links` a dangling symlink surfaces as a walk error
    /// rather than an entry; it still counts as one unreadable file.
    fn failed_file(&self, err: &walkdir::Error) -> Option<PathBuf> {
        if err.depth() == 0 || err.loop_ancestor().is_some() {
            return None;
        }
        let path = err.path()?;
        if path.is_dir() || !self.wants(path) {
            return None;
        }
        Some(path.to_path_buf())
    }
}

impl Iterator for JsonDirectoryIter {
    type Item = ParseOutcome;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    if let Some(path) = self.failed_file(&e) {
                        debug!("Skipping {}: {e}", path.display());
                        return Some(ParseOutcome::Failed {
                            path,
                            kind: FailureKind::Unreadable,
                        });
                    }
                    // Unreadable directories and a missing root are not files.
                    warn!("Directory walk error: {e}");
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir()) {
                continue;
            }
            if !self.wants(entry.path()) {
                continue;
            }

            return Some(read_outcome(entry.path()));
        }
    }
}
