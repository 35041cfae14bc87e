//! File system traversal module for `rufind`.
//!
//! This module handles:
//! - Root resolution and validation (must exist, must be a directory)
//! - Recursive directory traversal using `WalkDir`, never following symlinks
//! - Per-entry type classification, type filters and caller-supplied tests
//! - Depth gating for emission and recursion
//! - Pruning of directories that fail their tests when `no_recurse_failed` is set
//! - Optional progress spinner ticks via `indicatif`
//!
//! The main entry point is [`walk`], which returns the emitted [`Entry`]
//! records in raw traversal order. Ordering is applied afterwards by
//! [`crate::order::sort_entries`].
//!
//! Mid-walk I/O failures follow the configured [`ErrorPolicy`]: by default the
//! first failure aborts the call, with [`ErrorPolicy::Skip`] the failing
//! entry is logged and skipped and the result is partial.

use crate::data::{Entry, EntryType};
use crate::error::FindError;
use crate::options::{ErrorPolicy, FindConfig};
use indicatif::ProgressBar;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// Recursively walks the configured root and returns the emitted entries.
///
/// # Arguments
/// * `config` - A validated traversal configuration
/// * `progress` - Optional spinner, ticked once per visited entry
///
/// # Returns
/// * `Result<Vec<Entry>, FindError>` - Emitted entries in traversal order
///
/// # Errors
/// Returns an error if:
/// - The root does not exist or is not a directory
/// - A directory cannot be read or an entry cannot be stat'ed, under [`ErrorPolicy::Abort`]
/// - The configured cancellation flag is raised
pub fn walk(config: &FindConfig, progress: Option<&ProgressBar>) -> Result<Vec<Entry>, FindError> {
    let root = resolve_root(config.root())?;

    let mut walker = WalkDir::new(&root).follow_links(false);
    if let Some(max_depth) = config.depth.max_depth() {
        walker = walker.max_depth(max_depth);
    }

    let mut entries = Vec::new();
    let mut visited = 0usize;
    let mut skipped = 0usize;
    let mut iter = walker.into_iter();

    while let Some(next) = iter.next() {
        if config.is_cancelled() {
            debug!(root = %root.display(), visited, "traversal cancelled");
            return Err(FindError::Cancelled);
        }
        if let Some(pb) = progress {
            pb.tick();
        }

        let dent = match next {
            Ok(dent) => dent,
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                let source = io::Error::from(err);
                match config.error_policy {
                    ErrorPolicy::Abort => return Err(FindError::traversal(path, source)),
                    ErrorPolicy::Skip => {
                        warn!(path = %path.display(), error = %source, "skipping unreadable entry");
                        skipped += 1;
                        continue;
                    }
                }
            }
        };
        visited += 1;

        // The root was checked through its links, and walkdir descends into a linked root.
        let entry_type = if dent.depth() == 0 {
            EntryType::Dir
        } else {
            EntryType::classify(dent.file_type())
        };
        let entry = Entry::new(dent.path().to_path_buf(), dent.depth(), entry_type);
        let passed = config.passes_tests(&entry);

        if entry.is_dir() && !passed && config.no_recurse_failed {
            trace!(path = %entry.path.display(), "not descending into failed directory");
            iter.skip_current_dir();
            continue;
        }

        if passed && config.emits(&entry) {
            entries.push(entry);
        }
    }

    debug!(
        root = %root.display(),
        visited,
        emitted = entries.len(),
        skipped,
        "traversal complete"
    );
    Ok(entries)
}

/// Makes `root` absolute and checks that it is an existing directory.
///
/// Symlinks are followed for the root only, so a link to a directory is a valid root.
pub fn resolve_root(root: &Path) -> Result<PathBuf, FindError> {
    let root = std::path::absolute(root).map_err(|err| FindError::traversal(root, err))?;

    let metadata = match fs::metadata(&root) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(FindError::RootNotFound(root));
        }
        Err(err) => return Err(FindError::traversal(root, err)),
    };

    if !metadata.is_dir() {
        return Err(FindError::RootNotDirectory(root));
    }

    Ok(root)
}
