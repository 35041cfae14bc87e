//! Result ordering for traversal output.
//!
//! The walker emits entries in raw directory-read order. Everything related to
//! determinism lives here, as pure post-processing over the collected entries:
//!
//! - [`SortMode::TreeOrder`]: depth-first pre-order. Within a directory, its
//!   non-directory children come first by name, then each subdirectory by name
//!   followed immediately by its whole subtree.
//! - [`SortMode::DepthOrder`]: shallowest first, ties broken by tree order.
//! - [`SortMode::Unordered`]: untouched.

use crate::data::Entry;
use clap::ValueEnum;
use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::{Component, Path};

/// Enum for specifying how traversal results are ordered.
///
/// # Variants
/// * `TreeOrder` - Pre-order walk with children visited in ascending name order
/// * `DepthOrder` - Ascending distance from the root, tree order within a level
/// * `Unordered` - Whatever order the directory reads produced
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortMode {
    #[default]
    TreeOrder,
    DepthOrder,
    Unordered,
}

/// Sorts entries in place based on the provided sort mode.
///
/// Both sorts are stable, so entries that compare equal keep their traversal order.
pub fn sort_entries(entries: &mut [Entry], mode: SortMode) {
    match mode {
        SortMode::TreeOrder => entries.sort_by(tree_order),
        SortMode::DepthOrder => {
            entries.sort_by(|a, b| a.depth.cmp(&b.depth).then_with(|| tree_order(a, b)))
        }
        SortMode::Unordered => {}
    }
}

/// Compares two entries by their position in a tree-order walk.
///
/// Every path component except the last names a directory. The last one names
/// a directory only when the entry is one. At the first differing component a
/// non-directory sorts before a directory, and names break the tie.
pub fn tree_order(a: &Entry, b: &Entry) -> Ordering {
    let mut a_names = names(&a.path).peekable();
    let mut b_names = names(&b.path).peekable();
    loop {
        let (a_name, b_name) = match (a_names.next(), b_names.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a_name), Some(b_name)) => (a_name, b_name),
        };
        let a_is_dir = a_names.peek().is_some() || a.is_dir();
        let b_is_dir = b_names.peek().is_some() || b.is_dir();
        match (a_is_dir, a_name).cmp(&(b_is_dir, b_name)) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
}

fn names(path: &Path) -> impl Iterator<Item = &OsStr> {
    path.components().filter_map(|c| match c {
        Component::Normal(name) => Some(name),
        _ => None,
    })
}
