//! CSV output formatter for traversal results.
//!
//! This module provides functionality to export traversal results
//! to CSV format for further processing or analysis.

use crate::cli::Args;
use crate::data::Entry;
use anyhow::{Context, Result};
use csv::Writer;
use std::fs::File;
use std::io;

/// Renders entries to CSV format.
///
/// # Arguments
/// * `entries` - A slice of already-filtered and ordered entries to render
/// * `args` - Command line arguments that control output formatting
///
/// # Returns
/// * `Result<()>` - Ok if rendering succeeded, Err if there was an issue
///
/// # Note
/// Rows are produced by `Entry`'s `Serialize` derive, so the header is
/// `path,name,depth,entry_type,is_root`.
pub fn render(entries: &[Entry], args: &Args) -> Result<()> {
    let writer: Box<dyn io::Write> = if let Some(output_file) = &args.output {
        Box::new(
            File::create(output_file)
                .with_context(|| format!("Failed to create CSV output '{}'", output_file))?,
        )
    } else {
        Box::new(io::stdout())
    };

    write_entries(writer, entries)?;

    if let Some(output_file) = &args.output {
        eprintln!("CSV output written to: {}", output_file);
    }

    Ok(())
}

/// Serializes every entry as one CSV row into `writer`.
pub fn write_entries<W: io::Write>(writer: W, entries: &[Entry]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    for entry in entries {
        csv_writer
            .serialize(entry)
            .with_context(|| format!("Failed to write CSV row for {}", entry.path.display()))?;
    }
    csv_writer.flush()?;
    Ok(())
}
