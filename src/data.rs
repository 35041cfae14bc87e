//! Data structures for representing file system entries.
//!
//! This module defines the [`Entry`] record produced for every node visited
//! during traversal, and the [`EntryType`] vocabulary used by the type filters.
//! [`EntryType::classify`] is the only place raw file-type bits are inspected.

use serde::Serialize;
use std::fs::FileType;
use std::path::{Path, PathBuf};

/// Represents one filesystem node discovered during traversal.
///
/// # Fields
/// * `path` - Absolute path to the entry
/// * `name` - Base name of the entry (the final path component)
/// * `depth` - Distance from the traversal root; the root itself is depth 0
/// * `entry_type` - Semantic type of the entry, never resolved through symlinks
/// * `is_root` - Whether this entry is the traversal root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub depth: usize,
    pub entry_type: EntryType,
    pub is_root: bool,
}

impl Entry {
    /// Builds an entry for `path`, deriving the base name from its last component.
    pub fn new(path: PathBuf, depth: usize, entry_type: EntryType) -> Self {
        let name = base_name(&path);
        Self {
            path,
            name,
            depth,
            entry_type,
            is_root: depth == 0,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Dir
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Represents the semantic type of a file system entry.
///
/// # Variants
/// * `File` - A regular file
/// * `Dir` - A directory
/// * `BlockDevice` - A block special device
/// * `CharDevice` - A character special device
/// * `Fifo` - A named pipe
/// * `Symlink` - A symbolic link (never followed)
/// * `Other` - Anything else, e.g. a socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    File,
    Dir,
    BlockDevice,
    CharDevice,
    Fifo,
    Symlink,
    Other,
}

impl EntryType {
    /// Maps a raw file type to its semantic type.
    ///
    /// The `FileType` must come from an lstat-style query so that symbolic links
    /// are reported as links rather than as their targets.
    #[cfg(unix)]
    pub fn classify(file_type: FileType) -> Self {
        use std::os::unix::fs::FileTypeExt;

        if file_type.is_symlink() {
            EntryType::Symlink
        } else if file_type.is_dir() {
            EntryType::Dir
        } else if file_type.is_file() {
            EntryType::File
        } else if file_type.is_block_device() {
            EntryType::BlockDevice
        } else if file_type.is_char_device() {
            EntryType::CharDevice
        } else if file_type.is_fifo() {
            EntryType::Fifo
        } else {
            EntryType::Other
        }
    }

    /// Maps a raw file type to its semantic type.
    ///
    /// Device and FIFO kinds are not distinguishable here and map to `Other`.
    #[cfg(not(unix))]
    pub fn classify(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryType::Symlink
        } else if file_type.is_dir() {
            EntryType::Dir
        } else if file_type.is_file() {
            EntryType::File
        } else {
            EntryType::Other
        }
    }

    /// Returns a string representation of the entry type.
    ///
    /// # Returns
    /// * `"FILE"`, `"DIR"`, `"BLOCK"`, `"CHAR"`, `"FIFO"`, `"LINK"` or `"OTHER"`
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::File => "FILE",
            EntryType::Dir => "DIR",
            EntryType::BlockDevice => "BLOCK",
            EntryType::CharDevice => "CHAR",
            EntryType::Fifo => "FIFO",
            EntryType::Symlink => "LINK",
            EntryType::Other => "OTHER",
        }
    }
}
