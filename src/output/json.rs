//! JSON output formatter for traversal results.

use crate::cli::Args;
use crate::data::Entry;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};

/// Renders entries as a pretty-printed JSON array, to `--output` or stdout.
pub fn render(entries: &[Entry], args: &Args) -> Result<()> {
    if let Some(output_file) = &args.output {
        let file = File::create(output_file)
            .with_context(|| format!("Failed to create JSON output '{}'", output_file))?;
        write_entries(file, entries)?;
        eprintln!("JSON output written to: {}", output_file);
    } else {
        write_entries(io::stdout().lock(), entries)?;
    }
    Ok(())
}

pub fn write_entries<W: Write>(mut writer: W, entries: &[Entry]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, entries).context("Failed to serialize entries")?;
    writeln!(writer)?;
    Ok(())
}
