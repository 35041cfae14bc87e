//! CLI interface definitions for the `rufind` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`OutputFormat`]: how results are printed
//!
//! `Args` converts into the library's [`FindOptions`] via [`Args::to_options`].
//! Closures cannot be passed on a command line, so the name-matching flags
//! (`--name-contains`, `--name-prefix`, `--name-suffix`) each become one test.
//!
//! # Example
//!
//! ```bash
//! rufind /var/log --depth 2 --only-files --name-suffix .log --sort depth-order
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use crate::data::Entry;
use crate::options::{ErrorPolicy, FindOptions};
use crate::order::SortMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the `rufind` traversal tool.
#[derive(Parser, Debug, Default)]
#[command(name = "rufind", author = "Sam Green", version, about)]
pub struct Args {
    /// Directory to search (defaults to current directory)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Maximum recursion distance from the root (root = 0)
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// Only report entries at exactly --depth
    #[arg(long, requires = "depth")]
    pub at_depth: bool,

    /// Do not report the root directory itself
    #[arg(long)]
    pub exclude_root: bool,

    /// Only report regular files
    #[arg(long)]
    pub only_files: bool,

    /// Only report directories
    #[arg(long)]
    pub only_dirs: bool,

    /// Only report block devices
    #[arg(long)]
    pub only_block_devices: bool,

    /// Only report character devices
    #[arg(long)]
    pub only_character_devices: bool,

    /// Only report FIFOs
    #[arg(long)]
    pub only_fifos: bool,

    /// Only report symbolic links
    #[arg(long)]
    pub only_symbolic_links: bool,

    /// Skip block devices
    #[arg(long)]
    pub no_block_devices: bool,

    /// Skip character devices
    #[arg(long)]
    pub no_character_devices: bool,

    /// Skip FIFOs
    #[arg(long)]
    pub no_fifos: bool,

    /// Skip symbolic links
    #[arg(long)]
    pub no_symbolic_links: bool,

    /// Only report entries whose name contains TEXT (repeatable, all must match)
    #[arg(long, value_name = "TEXT", action = clap::ArgAction::Append)]
    pub name_contains: Vec<String>,

    /// Only report entries whose name starts with TEXT
    #[arg(long, value_name = "TEXT")]
    pub name_prefix: Option<String>,

    /// Only report entries whose name ends with TEXT
    #[arg(long, value_name = "TEXT")]
    pub name_suffix: Option<String>,

    /// Do not descend into directories that fail the name tests
    #[arg(long)]
    pub no_recurse_failed: bool,

    /// Result ordering
    #[arg(long, value_enum, default_value_t = SortMode::TreeOrder)]
    pub sort: SortMode,

    /// Skip unreadable directories with a warning instead of failing
    #[arg(long)]
    pub skip_errors: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Write CSV or JSON output to FILE instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<String>,

    /// Show a spinner while scanning
    #[arg(long)]
    pub progress: bool,

    /// Enable performance profiling and show timing summary
    #[arg(long)]
    pub profile: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Enum for specifying how results are printed.
///
/// # Variants
/// * `Plain` - One absolute path per line
/// * `Long` - Type marker, depth and path per line
/// * `Csv` - CSV rows with every entry attribute
/// * `Json` - A JSON array of entries
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Long,
    Csv,
    Json,
}

impl Args {
    /// Builds traversal options from the parsed arguments.
    pub fn to_options(&self) -> FindOptions {
        let mut options = FindOptions::new(&self.root)
            .at_depth(self.at_depth)
            .exclude_root(self.exclude_root)
            .only_files(self.only_files)
            .only_dirs(self.only_dirs)
            .only_block_devices(self.only_block_devices)
            .only_character_devices(self.only_character_devices)
            .only_fifos(self.only_fifos)
            .only_symbolic_links(self.only_symbolic_links)
            .no_block_devices(self.no_block_devices)
            .no_character_devices(self.no_character_devices)
            .no_fifos(self.no_fifos)
            .no_symbolic_links(self.no_symbolic_links)
            .no_recurse_failed(self.no_recurse_failed)
            .sort(self.sort);

        options.depth = self.depth;

        for needle in &self.name_contains {
            let needle = needle.clone();
            options = options.test(move |e: &Entry| e.name.contains(needle.as_str()));
        }
        if let Some(prefix) = self.name_prefix.clone() {
            options = options.test(move |e: &Entry| e.name.starts_with(prefix.as_str()));
        }
        if let Some(suffix) = self.name_suffix.clone() {
            options = options.test(move |e: &Entry| e.name.ends_with(suffix.as_str()));
        }

        if self.skip_errors {
            options = options.error_policy(ErrorPolicy::Skip);
        }

        options
    }
}
