//! Terminal output formatter for traversal results.
//!
//! This module provides functionality to display traversal results
//! in a human-readable format directly to the terminal.

use crate::cli::{Args, OutputFormat};
use crate::data::Entry;
use anyhow::Result;
use std::io::{self, Write};

/// Renders entries to terminal output.
///
/// # Arguments
/// * `entries` - A slice of already-filtered and ordered entries to render
/// * `args` - Command line arguments that control output formatting
///
/// # Returns
/// * `Result<()>` - Ok if rendering succeeded, Err if there was an issue
///
/// # Note
/// `--format long` prints a `[TYPE]` marker and the depth before each path;
/// every other format prints the bare absolute path.
pub fn render(entries: &[Entry], args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_entries(&mut out, entries, args.format == OutputFormat::Long)?;
    out.flush()?;
    Ok(())
}

/// Writes one line per entry to `out`.
pub fn write_entries<W: Write>(out: &mut W, entries: &[Entry], long: bool) -> io::Result<()> {
    for entry in entries {
        if long {
            let marker = format!("[{}]", entry.entry_type.as_str());
            writeln!(
                out,
                "{:<7} {:>3} {}",
                marker,
                entry.depth,
                entry.path.display()
            )?;
        } else {
            writeln!(out, "{}", entry.path.display())?;
        }
    }
    Ok(())
}
