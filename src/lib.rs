//! Library crate for rufind
//!
//! `rufind` is a `find`-like recursive traversal engine: given a root directory
//! it enumerates the entries below it, applying depth limits, entry-type
//! filters, caller-supplied tests and one of several ordering strategies.
//!
//! # Modules
//!
//! - [`options`]: Traversal options and their validation
//! - [`data`]: Core data structures (`Entry`, `EntryType`)
//! - [`scan`]: Recursive directory traversal
//! - [`order`]: Result ordering (`SortMode`)
//! - [`error`]: The `FindError` taxonomy
//! - [`cli`]: Command-line interface definitions
//! - [`output`]: Output formatters (plain, long, CSV, JSON)
//! - [`metrics`]: Phase timing for `--profile`
//!
//! # Example
//!
//! ```no_run
//! use rufind::{find, Entry, FindOptions, SortMode};
//!
//! let options = FindOptions::new("/var/log")
//!     .depth(2)
//!     .only_files(true)
//!     .test(|e: &Entry| e.name.ends_with(".log"))
//!     .sort(SortMode::DepthOrder);
//!
//! for path in find(&options)? {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), rufind::FindError>(())
//! ```

pub mod cli;
pub mod data;
pub mod error;
pub mod metrics;
pub mod options;
pub mod order;
pub mod output;
pub mod scan;

pub use cli::Args;
pub use data::{Entry, EntryType};
pub use error::FindError;
pub use options::{EntryPredicate, ErrorPolicy, FindConfig, FindOptions};
pub use order::SortMode;

use std::path::PathBuf;

/// Walks `options.root` and returns the emitted paths in the requested order.
///
/// # Errors
/// Configuration errors are reported before any filesystem access. See
/// [`FindError`] for the full list.
pub fn find(options: &FindOptions) -> Result<Vec<PathBuf>, FindError> {
    Ok(find_entries(options)?
        .into_iter()
        .map(|entry| entry.path)
        .collect())
}

/// Like [`find`], but returns the full entry records.
pub fn find_entries(options: &FindOptions) -> Result<Vec<Entry>, FindError> {
    let config = options.validate()?;
    let mut entries = scan::walk(&config, None)?;
    order::sort_entries(&mut entries, config.sort);
    Ok(entries)
}
