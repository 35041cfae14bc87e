//! Modular output system for the `rufind` application.
//!
//! This module provides a pluggable output system with different formatters
//! for displaying traversal results. Every formatter receives entries that
//! are already filtered and ordered and contains no business logic.
//!
//! # Available Formatters
//!
//! - **Terminal**: plain paths, or a long listing with type and depth columns
//! - **CSV**: Machine-readable CSV rows via `csv::Writer`
//! - **JSON**: A pretty-printed JSON array via `serde_json`

pub mod csv;
pub mod json;
pub mod terminal;

use crate::cli::{Args, OutputFormat};
use crate::data::Entry;
use anyhow::Result;

/// CSV output renderer function.
///
/// See [`csv::render`] for full documentation.
pub use csv::render as render_csv;

/// JSON output renderer function.
///
/// See [`json::render`] for full documentation.
pub use json::render as render_json;

/// Terminal output renderer function.
///
/// See [`terminal::render`] for full documentation.
pub use terminal::render as render_terminal;

/// Dispatches to the renderer selected by `--format`.
pub fn render(entries: &[Entry], args: &Args) -> Result<()> {
    match args.format {
        OutputFormat::Plain | OutputFormat::Long => render_terminal(entries, args),
        OutputFormat::Csv => render_csv(entries, args),
        OutputFormat::Json => render_json(entries, args),
    }
}
