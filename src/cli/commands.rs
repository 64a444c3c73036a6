//! Command implementations for the jsontok CLI.

use std::io::{self, BufWriter};
use std::time::Instant;

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::aggregate::{
    CorpusStats, field_counts_with_stats, token_counts_with_stats, tokenize_directory,
};
use crate::corpus::counter::Counter;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: JsontokArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args, &args),
        Command::TokenCounts(count_args) => count_tokens(count_args, &args),
        Command::FieldCounts(field_args) => count_fields(field_args, &args),
    }
}

/// Stream the tokens of every record to stdout.
fn tokenize(args: &TokenizeArgs, cli_args: &JsontokArgs) -> Result<()> {
    let config = args.tokenizer.settings()?.build()?;
    let directory = args.walk.directory(&args.directory);
    info!(
        "Tokenizing {} with {:?}",
        directory.root().display(),
        config
    );

    let start_time = Instant::now();
    let mut records = tokenize_directory(args.classification.as_str(), &directory, &config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = write_records(
        &mut out,
        records.by_ref(),
        cli_args.output_format,
        cli_args.pretty,
    )?;

    report(records.stats(), start_time);
    info!("Wrote {written} records");
    Ok(())
}

/// Count tokens across the directory and print the table.
fn count_tokens(args: &TokenCountsArgs, cli_args: &JsontokArgs) -> Result<()> {
    let config = args.tokenizer.settings()?.build()?;
    let directory = args.walk.directory(&args.directory);
    info!(
        "Counting tokens in {} with {:?}",
        directory.root().display(),
        config
    );

    let start_time = Instant::now();
    let (counter, stats) = token_counts_with_stats(&directory, &config);
    report(stats, start_time);

    print_counts(&counter, args.top, "token", cli_args)
}

/// Count fields across the directory and print the table.
fn count_fields(args: &FieldCountsArgs, cli_args: &JsontokArgs) -> Result<()> {
    let directory = args.walk.directory(&args.directory);
    info!("Counting fields in {}", directory.root().display());

    let start_time = Instant::now();
    let (counter, stats) = field_counts_with_stats(&directory);
    report(stats, start_time);

    print_counts(&counter, args.top, "field", cli_args)
}

fn print_counts(
    counter: &Counter,
    top: Option<usize>,
    heading: &str,
    cli_args: &JsontokArgs,
) -> Result<()> {
    let pairs = match top {
        Some(n) => counter.most_common(Some(n)),
        None => counter.sorted(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_counts(
        &mut out,
        &pairs,
        heading,
        cli_args.output_format,
        cli_args.pretty,
    )
}

/// Log a pass summary; failures are a warning, not an error.
fn report(stats: CorpusStats, start_time: Instant) {
    info!(
        "Processed {} files in {}ms ({} parsed, {} failed)",
        stats.total(),
        start_time.elapsed().as_millis(),
        stats.parsed,
        stats.failed
    );
    if stats.failed > 0 {
        warn!("{} files could not be parsed as JSON objects", stats.failed);
    }
    if stats.total() == 0 {
        warn!("No files found");
    }
}
