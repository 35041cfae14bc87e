//! Main entry point for the `rufind` CLI application.
//!
//! `rufind` is a `find`-like traversal tool with typed entry filters, depth
//! control, name tests that can prune recursion, and stable ordering.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Installs a `tracing` subscriber on stderr (`-v`, `RUFIND_LOG`)
//! - Validates options, walks the tree and orders the result
//! - Hands the ordered entries to the selected output formatter
//!
//! # Flags of Interest
//! - `--depth N` / `--at-depth`: Limit or pin the reported depth
//! - `--only-*` / `--no-*`: Entry type filters
//! - `--name-*` with `--no-recurse-failed`: Prune non-matching directories
//! - `--sort tree-order|depth-order|unordered`: Result ordering

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rufind::metrics::{PhaseTimer, ProfileData, print_profile_summary, rss_after_phase, save_stats_json};
use rufind::{Args, order, output, scan};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up logging to stderr. `RUFIND_LOG` takes precedence over `-v`.
fn setup_logging(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "rufind=warn",
        1 => "rufind=debug",
        _ => "rufind=trace",
    };
    let filter = match std::env::var("RUFIND_LOG") {
        Ok(directives) => EnvFilter::try_new(directives).context("Invalid RUFIND_LOG filter")?,
        Err(_) => EnvFilter::new(default_level),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}

/// Creates the scan spinner shown with `--progress`.
fn scan_spinner() -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} Scanning... [{elapsed}]")
            .context("Failed to set progress template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose)?;

    let mut profile = ProfileData::new();

    // Parse args → validate → walk → order → render
    let timer = PhaseTimer::new("Validate");
    let config = args.to_options().validate()?;
    profile.add_phase(timer.finish());

    let spinner = if args.progress {
        Some(scan_spinner()?)
    } else {
        None
    };

    let timer = PhaseTimer::new("Walk");
    let walked = scan::walk(&config, spinner.as_ref());
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    let mut entries =
        walked.with_context(|| format!("Failed to search '{}'", config.root().display()))?;
    profile.add_phase(timer.finish());

    let timer = PhaseTimer::new("Order");
    order::sort_entries(&mut entries, config.sort);
    profile.add_phase(timer.finish());

    output::render(&entries, &args)?;

    if args.profile {
        profile.entries_emitted = entries.len() as u64;
        profile.memory_peak = rss_after_phase();
        profile.add_metadata("root", &config.root().display().to_string());
        profile.add_metadata("sort", &format!("{:?}", config.sort));
        print_profile_summary(&profile);

        if let Some(output_file) = &args.output {
            save_stats_json(Path::new(output_file), &profile)?;
        }
    }

    Ok(())
}
