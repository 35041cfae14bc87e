//! Traversal options and their validation.
//!
//! [`FindOptions`] is the raw option set a caller fills in: every `only_*` and
//! `no_*` flag is an independent boolean, matching the command-line surface.
//! [`FindOptions::validate`] checks the set for internal consistency and turns
//! it into a [`FindConfig`], where the `only_*` flags have collapsed into a
//! single [`TypeFilter`] so an illegal combination cannot be expressed.
//!
//! Validation never touches the filesystem. The root's existence is checked by
//! the walker.

use crate::data::{Entry, EntryType};
use crate::error::FindError;
use crate::order::SortMode;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// A test applied to every visited entry.
///
/// Implemented for any `Fn(&Entry) -> bool`, so named functions, closures and
/// custom types can all be used as tests.
pub trait EntryPredicate: Send + Sync {
    fn test(&self, entry: &Entry) -> bool;
}

impl<F> EntryPredicate for F
where
    F: Fn(&Entry) -> bool + Send + Sync,
{
    fn test(&self, entry: &Entry) -> bool {
        self(entry)
    }
}

/// How failures to read a directory or stat an entry mid-walk are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the whole call with [`FindError::Traversal`].
    #[default]
    Abort,
    /// Skip the unreadable entry or subtree, log a warning and keep going.
    Skip,
}

/// Raw traversal options, as supplied by the caller.
#[derive(Clone, Default)]
pub struct FindOptions {
    pub root: Option<PathBuf>,
    pub depth: Option<usize>,
    pub at_depth: bool,
    pub exclude_root: bool,
    pub only_files: bool,
    pub only_dirs: bool,
    pub only_block_devices: bool,
    pub only_character_devices: bool,
    pub only_fifos: bool,
    pub only_symbolic_links: bool,
    pub no_block_devices: bool,
    pub no_character_devices: bool,
    pub no_fifos: bool,
    pub no_symbolic_links: bool,
    pub tests: Vec<Arc<dyn EntryPredicate>>,
    pub no_recurse_failed: bool,
    pub sort: SortMode,
    pub error_policy: ErrorPolicy,
    pub cancel_flag: Option<Arc<AtomicBool>>,
}

impl fmt::Debug for FindOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindOptions")
            .field("root", &self.root)
            .field("depth", &self.depth)
            .field("at_depth", &self.at_depth)
            .field("exclude_root", &self.exclude_root)
            .field("only", &self.only_flags())
            .field("no_block_devices", &self.no_block_devices)
            .field("no_character_devices", &self.no_character_devices)
            .field("no_fifos", &self.no_fifos)
            .field("no_symbolic_links", &self.no_symbolic_links)
            .field("tests", &self.tests.len())
            .field("no_recurse_failed", &self.no_recurse_failed)
            .field("sort", &self.sort)
            .field("error_policy", &self.error_policy)
            .finish()
    }
}

impl FindOptions {
    /// Create options rooted at `root` with every other option at its default.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Default::default()
        }
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn at_depth(mut self, at_depth: bool) -> Self {
        self.at_depth = at_depth;
        self
    }

    pub fn exclude_root(mut self, exclude: bool) -> Self {
        self.exclude_root = exclude;
        self
    }

    pub fn only_files(mut self, only: bool) -> Self {
        self.only_files = only;
        self
    }

    pub fn only_dirs(mut self, only: bool) -> Self {
        self.only_dirs = only;
        self
    }

    pub fn only_block_devices(mut self, only: bool) -> Self {
        self.only_block_devices = only;
        self
    }

    pub fn only_character_devices(mut self, only: bool) -> Self {
        self.only_character_devices = only;
        self
    }

    pub fn only_fifos(mut self, only: bool) -> Self {
        self.only_fifos = only;
        self
    }

    pub fn only_symbolic_links(mut self, only: bool) -> Self {
        self.only_symbolic_links = only;
        self
    }

    pub fn no_block_devices(mut self, no: bool) -> Self {
        self.no_block_devices = no;
        self
    }

    pub fn no_character_devices(mut self, no: bool) -> Self {
        self.no_character_devices = no;
        self
    }

    pub fn no_fifos(mut self, no: bool) -> Self {
        self.no_fifos = no;
        self
    }

    pub fn no_symbolic_links(mut self, no: bool) -> Self {
        self.no_symbolic_links = no;
        self
    }

    /// Append a test. Tests are evaluated in the order they were added.
    pub fn test<P>(mut self, predicate: P) -> Self
    where
        P: EntryPredicate + 'static,
    {
        self.tests.push(Arc::new(predicate));
        self
    }

    pub fn no_recurse_failed(mut self, no_recurse: bool) -> Self {
        self.no_recurse_failed = no_recurse;
        self
    }

    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Set a flag that aborts the traversal with [`FindError::Cancelled`] once raised.
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    fn only_flags(&self) -> Vec<&'static str> {
        [
            (self.only_files, "onlyFiles"),
            (self.only_dirs, "onlyDirs"),
            (self.only_block_devices, "onlyBlockDevices"),
            (self.only_character_devices, "onlyCharacterDevices"),
            (self.only_fifos, "onlyFIFOs"),
            (self.only_symbolic_links, "onlySymbolicLinks"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }

    fn only_type(&self) -> Option<EntryType> {
        if self.only_files {
            Some(EntryType::File)
        } else if self.only_dirs {
            Some(EntryType::Dir)
        } else if self.only_block_devices {
            Some(EntryType::BlockDevice)
        } else if self.only_character_devices {
            Some(EntryType::CharDevice)
        } else if self.only_fifos {
            Some(EntryType::Fifo)
        } else if self.only_symbolic_links {
            Some(EntryType::Symlink)
        } else {
            None
        }
    }

    /// Check the options for internal consistency.
    ///
    /// Checks run in a fixed order so the reported error is predictable when
    /// several problems are present: missing root, `at_depth` without `depth`,
    /// conflicting `only` flags, then an `only` flag with `no_recurse_failed`.
    pub fn validate(&self) -> Result<FindConfig, FindError> {
        let root = match &self.root {
            Some(root) if !root.as_os_str().is_empty() => root.clone(),
            _ => return Err(FindError::MissingRoot),
        };

        if self.at_depth && self.depth.is_none() {
            return Err(FindError::MissingDepthForAtDepth);
        }

        let only = self.only_flags();
        if only.len() > 1 {
            return Err(FindError::ConflictingOnlyFilters(only));
        }

        if !only.is_empty() && self.no_recurse_failed {
            return Err(FindError::OnlyFilterWithNoRecurseFailed);
        }

        let type_filter = match self.only_type() {
            Some(entry_type) => TypeFilter::Only(entry_type),
            None => TypeFilter::Any {
                excluded: [
                    (self.no_block_devices, EntryType::BlockDevice),
                    (self.no_character_devices, EntryType::CharDevice),
                    (self.no_fifos, EntryType::Fifo),
                    (self.no_symbolic_links, EntryType::Symlink),
                ]
                .into_iter()
                .filter_map(|(set, entry_type)| set.then_some(entry_type))
                .collect(),
            },
        };

        let depth = match (self.depth, self.at_depth) {
            (None, _) => DepthLimit::Unbounded,
            (Some(max), false) => DepthLimit::UpTo(max),
            (Some(exact), true) => DepthLimit::Exactly(exact),
        };

        let config = FindConfig {
            root,
            depth,
            exclude_root: self.exclude_root,
            type_filter,
            tests: self.tests.clone(),
            no_recurse_failed: self.no_recurse_failed,
            sort: self.sort,
            error_policy: self.error_policy,
            cancel_flag: self.cancel_flag.clone(),
        };
        debug!(?config, "validated find options");
        Ok(config)
    }
}

/// Which entry types may be emitted.
///
/// With `Only`, any `no_*` exclusions are irrelevant and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    Any { excluded: Vec<EntryType> },
    Only(EntryType),
}

impl TypeFilter {
    pub fn allows(&self, entry_type: EntryType) -> bool {
        match self {
            TypeFilter::Any { excluded } => !excluded.contains(&entry_type),
            TypeFilter::Only(only) => *only == entry_type,
        }
    }
}

/// Depth bound derived from `depth` and `at_depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthLimit {
    Unbounded,
    UpTo(usize),
    Exactly(usize),
}

impl DepthLimit {
    /// Deepest level the walker needs to visit.
    pub fn max_depth(&self) -> Option<usize> {
        match *self {
            DepthLimit::Unbounded => None,
            DepthLimit::UpTo(depth) | DepthLimit::Exactly(depth) => Some(depth),
        }
    }

    /// Whether an entry at `depth` may be emitted.
    pub fn emits(&self, depth: usize) -> bool {
        match *self {
            DepthLimit::Unbounded => true,
            DepthLimit::UpTo(max) => depth <= max,
            DepthLimit::Exactly(exact) => depth == exact,
        }
    }
}

/// Validated, immutable traversal configuration.
#[derive(Clone)]
pub struct FindConfig {
    pub root: PathBuf,
    pub depth: DepthLimit,
    pub exclude_root: bool,
    pub type_filter: TypeFilter,
    pub tests: Vec<Arc<dyn EntryPredicate>>,
    pub no_recurse_failed: bool,
    pub sort: SortMode,
    pub error_policy: ErrorPolicy,
    pub cancel_flag: Option<Arc<AtomicBool>>,
}

impl fmt::Debug for FindConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindConfig")
            .field("root", &self.root)
            .field("depth", &self.depth)
            .field("exclude_root", &self.exclude_root)
            .field("type_filter", &self.type_filter)
            .field("tests", &self.tests.len())
            .field("no_recurse_failed", &self.no_recurse_failed)
            .field("sort", &self.sort)
            .field("error_policy", &self.error_policy)
            .finish()
    }
}

impl FindConfig {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `entry` passes every configured test. Empty tests always pass.
    pub fn passes_tests(&self, entry: &Entry) -> bool {
        self.tests.iter().all(|t| t.test(entry))
    }

    /// Whether `entry` should appear in the result, given it already passed its tests.
    pub fn emits(&self, entry: &Entry) -> bool {
        if entry.is_root && self.exclude_root {
            return false;
        }
        self.depth.emits(entry.depth) && self.type_filter.allows(entry.entry_type)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
