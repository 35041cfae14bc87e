//! Error types for traversal operations.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for [`crate::find`] and friends.
///
/// Configuration errors are reported before any filesystem access. Every
/// variant is fatal to the call; no partial result accompanies it.
#[derive(Error, Debug)]
pub enum FindError {
    #[error("Must provide 'root' to find")]
    MissingRoot,

    #[error("Did not find root directory at: {0}")]
    RootNotFound(PathBuf),

    #[error("'{0}' exists but is not a directory as required")]
    RootNotDirectory(PathBuf),

    #[error("Must provide 'depth' when 'atDepth' is true")]
    MissingDepthForAtDepth,

    #[error("Cannot specify multiple 'only' flags: {}", .0.join(", "))]
    ConflictingOnlyFilters(Vec<&'static str>),

    #[error("Cannot specify an 'only' flag together with 'noRecurseFailed'")]
    OnlyFilterWithNoRecurseFailed,

    #[error("Failed to read {path} during traversal")]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Traversal was cancelled")]
    Cancelled,
}

impl FindError {
    /// Create a Traversal error from a path and IO error.
    pub fn traversal(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Traversal {
            path: path.into(),
            source,
        }
    }

    /// Whether this error was detected from the configuration alone.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::MissingRoot
                | Self::MissingDepthForAtDepth
                | Self::ConflictingOnlyFilters(_)
                | Self::OnlyFilterWithNoRecurseFailed
        )
    }
}
