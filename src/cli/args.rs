//! Command line argument parsing for the jsontok CLI using clap.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::config::{SplitterKind, TokenizerSettings};
use crate::corpus::walker::JsonDirectory;
use crate::error::Result;

/// jsontok - tokenize a directory of JSON documents into FIELD:WORD tokens
#[derive(Parser, Debug, Clone)]
#[command(name = "jsontok")]
#[command(about = "Tokenize a directory of JSON documents into field-qualified tokens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct JsontokArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl JsontokArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Emit the tokens of every JSON file, one record per line
    Tokenize(TokenizeArgs),

    /// Count FIELD:WORD tokens across all files
    #[command(name = "token-counts")]
    TokenCounts(TokenCountsArgs),

    /// Count how many files contain each top-level field
    #[command(name = "field-counts")]
    FieldCounts(FieldCountsArgs),
}

/// Options controlling how field values become tokens
#[derive(Args, Debug, Clone, Default)]
pub struct TokenizerOptions {
    /// Tokenizer settings file (JSON); flags below override it
    #[arg(long = "config", value_name = "SETTINGS_FILE")]
    pub settings_file: Option<PathBuf>,

    /// Fields to tokenize (comma-separated, default: all fields)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// How to split normalized text into words
    #[arg(long, value_enum)]
    pub splitter: Option<SplitterKind>,

    /// Regex for the regex splitter (default: \w+)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Do not lowercase values
    #[arg(long)]
    pub keep_case: bool,

    /// Do not strip HTML markup
    #[arg(long)]
    pub keep_html: bool,

    /// Do not strip punctuation
    #[arg(long)]
    pub keep_punctuation: bool,
}

impl TokenizerOptions {
    /// Resolve the settings file (if any) and flag overrides.
    pub fn settings(&self) -> Result<TokenizerSettings> {
        let mut settings = match &self.settings_file {
            Some(path) => TokenizerSettings::from_file(path)?,
            None => TokenizerSettings::default(),
        };

        if !self.fields.is_empty() {
            settings.fields = Some(self.fields.clone());
        }
        if let Some(splitter) = self.splitter {
            settings.splitter = splitter;
        }
        if let Some(pattern) = &self.pattern {
            settings.pattern = Some(pattern.clone());
            if self.splitter.is_none() {
                settings.splitter = SplitterKind::Regex;
            }
        }
        if self.keep_case {
            settings.lowercase = false;
        }
        if self.keep_html {
            settings.strip_html = false;
        }
        if self.keep_punctuation {
            settings.strip_punctuation = false;
        }

        Ok(settings)
    }
}

/// Options controlling which files the walk visits
#[derive(Args, Debug, Clone, Default)]
pub struct WalkOptions {
    /// Only read files with this extension (e.g. json)
    #[arg(long)]
    pub extension: Option<String>,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_links: bool,
}

impl WalkOptions {
    /// Build the directory walker for `root`.
    pub fn directory(&self, root: &Path) -> JsonDirectory {
        let mut directory = JsonDirectory::new(root).follow_links(self.follow_links);
        if let Some(extension) = &self.extension {
            directory = directory.with_extension(extension.trim_start_matches('.'));
        }
        directory
    }
}

/// Arguments for tokenizing a directory
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Root directory of JSON files
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Classification label attached to every record
    #[arg(short = 'c', long = "class", default_value = "")]
    pub classification: String,

    #[command(flatten)]
    pub tokenizer: TokenizerOptions,

    #[command(flatten)]
    pub walk: WalkOptions,
}

/// Arguments for counting tokens
#[derive(Parser, Debug, Clone)]
pub struct TokenCountsArgs {
    /// Root directory of JSON files
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Only show the N most frequent tokens
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    #[command(flatten)]
    pub tokenizer: TokenizerOptions,

    #[command(flatten)]
    pub walk: WalkOptions,
}

/// Arguments for counting fields
#[derive(Parser, Debug, Clone)]
pub struct FieldCountsArgs {
    /// Root directory of JSON files
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Only show the N most common fields
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    #[command(flatten)]
    pub walk: WalkOptions,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, tab-separated output
    Human,
    /// JSON output (one object per line for records)
    Json,
    /// CSV output
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_tokenize_command() {
        let args = JsontokArgs::try_parse_from([
            "jsontok",
            "tokenize",
            "/data/news",
            "--class",
            "news",
            "--fields",
            "title,body",
            "--splitter",
            "whitespace",
        ])
        .unwrap();

        if let Command::Tokenize(tokenize_args) = args.command {
            assert_eq!(tokenize_args.directory, PathBuf::from("/data/news"));
            assert_eq!(tokenize_args.classification, "news");
            assert_eq!(tokenize_args.tokenizer.fields, vec!["title", "body"]);
            assert_eq!(
                tokenize_args.tokenizer.splitter,
                Some(SplitterKind::Whitespace)
            );
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_token_counts_command() {
        let args = JsontokArgs::try_parse_from([
            "jsontok",
            "token-counts",
            "corpus",
            "--top",
            "20",
            "--extension",
            "json",
            "-f",
            "json",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        if let Command::TokenCounts(count_args) = args.command {
            assert_eq!(count_args.top, Some(20));
            assert_eq!(count_args.walk.extension.as_deref(), Some("json"));
        } else {
            panic!("Expected TokenCounts command");
        }
    }

    #[test]
    fn test_field_counts_command() {
        let args =
            JsontokArgs::try_parse_from(["jsontok", "field-counts", "corpus", "--follow-links"])
                .unwrap();

        if let Command::FieldCounts(field_args) = args.command {
            assert_eq!(field_args.directory, PathBuf::from("corpus"));
            assert!(field_args.walk.follow_links);
            assert_eq!(field_args.top, None);
        } else {
            panic!("Expected FieldCounts command");
        }
    }

    #[test]
    fn test_verbosity() {
        let args = JsontokArgs::try_parse_from(["jsontok", "field-counts", "."]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = JsontokArgs::try_parse_from(["jsontok", "-vv", "field-counts", "."]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args =
            JsontokArgs::try_parse_from(["jsontok", "-q", "-v", "field-counts", "."]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_settings_overrides() {
        let options = TokenizerOptions {
            fields: vec!["title".to_string()],
            pattern: Some("[a-z]+".to_string()),
            keep_case: true,
            ..TokenizerOptions::default()
        };

        let settings = options.settings().unwrap();
        assert_eq!(settings.fields, Some(vec!["title".to_string()]));
        assert_eq!(settings.splitter, SplitterKind::Regex);
        assert!(!settings.lowercase);
        assert!(settings.strip_html);
        assert!(settings.strip_punctuation);
    }

    #[test]
    fn test_walk_options_strip_leading_dot() {
        let options = WalkOptions {
            extension: Some(".json".to_string()),
            follow_links: false,
        };
        let directory = options.directory(Path::new("corpus"));
        assert_eq!(directory.root(), Path::new("corpus"));
    }

    #[test]
    fn test_missing_directory_is_rejected() {
        assert!(JsontokArgs::try_parse_from(["jsontok", "tokenize"]).is_err());
    }
}
