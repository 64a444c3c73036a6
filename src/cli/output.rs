//! Output formatting for CLI commands.
//!
//! Records are streamed as they are produced; counters are written once at
//! the end of a pass. All writers take any `Write` so they can be tested
//! against a buffer.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::corpus::aggregate::TokenizedRecord;
use crate::error::Result;

/// One row of a counter listing.
#[derive(Debug, Serialize)]
struct CountEntry<'a> {
    key: &'a str,
    count: u64,
}

/// Write records in the requested format, returning how many were written.
pub fn write_records<W, I>(
    out: &mut W,
    records: I,
    format: OutputFormat,
    pretty: bool,
) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = TokenizedRecord>,
{
    let mut written = 0;

    if format == OutputFormat::Csv {
        writeln!(out, "classification,identifier,tokens")?;
    }

    for record in records {
        match format {
            OutputFormat::Human => writeln!(
                out,
                "{}\t{}\t{}",
                record.classification,
                record.identifier,
                record.tokens.join(" ")
            )?,
            OutputFormat::Json => {
                if pretty {
                    serde_json::to_writer_pretty(&mut *out, &record)?;
                } else {
                    serde_json::to_writer(&mut *out, &record)?;
                }
                writeln!(out)?;
            }
            OutputFormat::Csv => writeln!(
                out,
                "{},{},{}",
                format_csv_value(&record.classification),
                format_csv_value(&record.identifier),
                format_csv_value(&record.tokens.join(" "))
            )?,
        }
        written += 1;
    }

    out.flush()?;
    Ok(written)
}

/// Write `(key, count)` pairs in the requested format.
///
/// `heading` names the key column for CSV output.
pub fn write_counts<W: Write>(
    out: &mut W,
    pairs: &[(String, u64)],
    heading: &str,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            let width = pairs
                .iter()
                .map(|(key, _)| key.chars().count())
                .max()
                .unwrap_or(0);
            for (key, count) in pairs {
                writeln!(out, "{key:<width$}  {count}")?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<CountEntry<'_>> = pairs
                .iter()
                .map(|(key, count)| CountEntry { key, count: *count })
                .collect();
            if pretty {
                serde_json::to_writer_pretty(&mut *out, &entries)?;
            } else {
                serde_json::to_writer(&mut *out, &entries)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "{heading},count")?;
            for (key, count) in pairs {
                writeln!(out, "{},{count}", format_csv_value(key))?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Quote a CSV field when it contains a delimiter, quote or line break.
fn format_csv_value(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
