use rufind::{Entry, FindError, FindOptions, SortMode, find, find_entries};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Paths of the shared fixture tree.
struct Tree {
    _temp_dir: TempDir,
    dir_a: PathBuf,
    file_a1: PathBuf,
    dir_aa: PathBuf,
    dir_aaa: PathBuf,
    dir_aaaa: PathBuf,
    file_aaaa1: PathBuf,
    dir_aab: PathBuf,
    file_aab1: PathBuf,
    dir_ab: PathBuf,
    file_ab1: PathBuf,
    dir_aba: PathBuf,
    file_aba1: PathBuf,
}

/// Builds the fixture tree:
///
/// data/
/// └── dirA/
///     ├── fileA-1.txt
///     ├── dirAA/
///     │   ├── dirAAA/
///     │   │   └── dirAAAA/
///     │   │       └── fileAAAA-1.txt
///     │   └── dirAAB/
///     │       └── fileAAB-1.txt
///     └── dirAB/
///         ├── fileAB-1.txt
///         └── dirABA/
///             └── fileABA-1.txt
fn create_tree() -> Tree {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir_a = temp_dir.path().join("data").join("dirA");
    let dir_aa = dir_a.join("dirAA");
    let dir_aaa = dir_aa.join("dirAAA");
    let dir_aaaa = dir_aaa.join("dirAAAA");
    let dir_aab = dir_aa.join("dirAAB");
    let dir_ab = dir_a.join("dirAB");
    let dir_aba = dir_ab.join("dirABA");

    for dir in [&dir_aaaa, &dir_aab, &dir_aba] {
        fs::create_dir_all(dir).expect("Failed to create fixture dirs");
    }

    let file_a1 = dir_a.join("fileA-1.txt");
    let file_aaaa1 = dir_aaaa.join("fileAAAA-1.txt");
    let file_aab1 = dir_aab.join("fileAAB-1.txt");
    let file_ab1 = dir_ab.join("fileAB-1.txt");
    let file_aba1 = dir_aba.join("fileABA-1.txt");
    for file in [&file_a1, &file_aaaa1, &file_aab1, &file_ab1, &file_aba1] {
        fs::write(file, "content").expect("Failed to write fixture file");
    }

    Tree {
        _temp_dir: temp_dir,
        dir_a,
        file_a1,
        dir_aa,
        dir_aaa,
        dir_aaaa,
        file_aaaa1,
        dir_aab,
        file_aab1,
        dir_ab,
        file_ab1,
        dir_aba,
        file_aba1,
    }
}

fn set(paths: &[PathBuf]) -> BTreeSet<PathBuf> {
    paths.iter().cloned().collect()
}

#[test]
fn test_everything_under_subdirectory() {
    let t = create_tree();
    let found = find(&FindOptions::new(&t.dir_aa)).expect("find failed");
    assert_eq!(
        found,
        vec![
            t.dir_aa.clone(),
            t.dir_aaa.clone(),
            t.dir_aaaa.clone(),
            t.file_aaaa1.clone(),
            t.dir_aab.clone(),
            t.file_aab1.clone(),
        ]
    );
}

#[test]
fn test_only_files() {
    let t = create_tree();
    let found = find(&FindOptions::new(&t.dir_a).only_files(true)).expect("find failed");
    assert_eq!(
        found,
        vec![
            t.file_a1.clone(),
            t.file_aaaa1.clone(),
            t.file_aab1.clone(),
            t.file_ab1.clone(),
            t.file_aba1.clone(),
        ]
    );
}

#[test]
fn test_only_dirs() {
    let t = create_tree();
    let found = find(&FindOptions::new(&t.dir_a).only_dirs(true)).expect("find failed");
    assert_eq!(
        found,
        vec![
            t.dir_a.clone(),
            t.dir_aa.clone(),
            t.dir_aaa.clone(),
            t.dir_aaaa.clone(),
            t.dir_aab.clone(),
            t.dir_ab.clone(),
            t.dir_aba.clone(),
        ]
    );
}

#[test]
fn test_only_dirs_excluding_root() {
    let t = create_tree();
    let options = FindOptions::new(&t.dir_a).only_dirs(true).exclude_root(true);
    let found = find(&options).expect("find failed");
    assert_eq!(
        found,
        vec![
            t.dir_aa.clone(),
            t.dir_aaa.clone(),
            t.dir_aaaa.clone(),
            t.dir_aab.clone(),
            t.dir_ab.clone(),
            t.dir_aba.clone(),
        ]
    );
}

#[test]
fn test_depth_limit() {
    let t = create_tree();
    let found = find(&FindOptions::new(&t.dir_a).only_dirs(true).depth(1)).expect("find failed");
    assert_eq!(found, vec![t.dir_a.clone(), t.dir_aa.clone(), t.dir_ab.clone()]);

    let found = find(
        &FindOptions::new(&t.dir_a)
            .only_dirs(true)
            .depth(1)
            .exclude_root(true),
    )
    .expect("find failed");
    assert_eq!(found, vec![t.dir_aa.clone(), t.dir_ab.clone()]);
}

#[test]
fn test_at_depth() {
    let t = create_tree();
    let options = FindOptions::new(&t.dir_a).only_dirs(true).at_depth(true);

    let found = find(&options.clone().depth(1)).expect("find failed");
    assert_eq!(found, vec![t.dir_aa.clone(), t.dir_ab.clone()]);

    let found = find(&options.depth(2)).expect("find failed");
    assert_eq!(
        found,
        vec![t.dir_aaa.clone(), t.dir_aab.clone(), t.dir_aba.clone()]
    );
}

#[test]
fn test_no_recurse_failed_traverses_passing_directories_only() {
    let t = create_tree();
    let options = FindOptions::new(&t.dir_a)
        .test(|e: &Entry| e.name == "data" || e.name.ends_with('A'))
        .no_recurse_failed(true);
    let found = find(&options).expect("find failed");
    assert_eq!(
        found,
        vec![
            t.dir_a.clone(),
            t.dir_aa.clone(),
            t.dir_aaa.clone(),
            t.dir_aaaa.clone(),
        ]
    );
}

#[test]
fn test_failed_directories_are_traversed_by_default() {
    let t = create_tree();
    let options = FindOptions::new(&t.dir_a)
        .only_dirs(true)
        .test(|e: &Entry| e.name.contains('B'));
    let found = find(&options).expect("find failed");
    assert_eq!(
        found,
        vec![t.dir_aab.clone(), t.dir_ab.clone(), t.dir_aba.clone()]
    );
}

#[test]
fn test_depth_order() {
    let t = create_tree();
    let options = FindOptions::new(&t.dir_a)
        .only_files(true)
        .sort(SortMode::DepthOrder);
    let found = find(&options).expect("find failed");
    assert_eq!(
        found,
        vec![
            t.file_a1.clone(),
            t.file_ab1.clone(),
            t.file_aab1.clone(),
            t.file_aba1.clone(),
            t.file_aaaa1.clone(),
        ]
    );
}

#[test]
fn test_unordered_has_same_members() {
    let t = create_tree();
    let sorted = find(&FindOptions::new(&t.dir_a)).expect("find failed");
    let unordered =
        find(&FindOptions::new(&t.dir_a).sort(SortMode::Unordered)).expect("find failed");
    assert_eq!(sorted.len(), unordered.len());
    assert_eq!(set(&sorted), set(&unordered));
}

#[test]
fn test_everything_is_found_exactly_once() {
    let t = create_tree();
    let found = find(&FindOptions::new(&t.dir_a)).expect("find failed");
    assert_eq!(found.len(), 12);
    assert_eq!(set(&found).len(), found.len());
}

#[test]
fn test_exclude_root_removes_exactly_the_root() {
    let t = create_tree();
    let with_root = find(&FindOptions::new(&t.dir_a)).expect("find failed");
    let without_root = find(&FindOptions::new(&t.dir_a).exclude_root(true)).expect("find failed");

    assert_eq!(with_root.len(), without_root.len() + 1);
    let removed: Vec<_> = set(&with_root).difference(&set(&without_root)).cloned().collect();
    assert_eq!(removed, vec![t.dir_a.clone()]);
}

#[test]
fn test_each_depth_adds_exactly_that_level() {
    let t = create_tree();
    for n in 1..=4 {
        let shallow = find_entries(&FindOptions::new(&t.dir_a).depth(n - 1)).expect("find failed");
        let deep = find_entries(&FindOptions::new(&t.dir_a).depth(n)).expect("find failed");
        let exact = find_entries(&FindOptions::new(&t.dir_a).depth(n).at_depth(true))
            .expect("find failed");

        let shallow_paths: BTreeSet<_> = shallow.iter().map(|e| e.path.clone()).collect();
        let deep_paths: BTreeSet<_> = deep.iter().map(|e| e.path.clone()).collect();
        assert!(deep_paths.is_superset(&shallow_paths));

        let added: BTreeSet<_> = deep_paths.difference(&shallow_paths).cloned().collect();
        let level_n: BTreeSet<_> = deep
            .iter()
            .filter(|e| e.depth == n)
            .map(|e| e.path.clone())
            .collect();
        let exact_paths: BTreeSet<_> = exact.iter().map(|e| e.path.clone()).collect();
        assert_eq!(added, level_n);
        assert_eq!(exact_paths, level_n);
    }
}

#[test]
fn test_tree_order_places_directories_before_descendants() {
    let t = create_tree();
    let found = find(&FindOptions::new(&t.dir_a)).expect("find failed");
    for (i, path) in found.iter().enumerate() {
        let parent = path.parent().expect("path has parent");
        if let Some(parent_pos) = found.iter().position(|p| p == parent) {
            assert!(parent_pos < i, "{} listed before its parent", path.display());
        }
    }
}

#[test]
fn test_depth_order_is_non_decreasing() {
    let t = create_tree();
    let entries =
        find_entries(&FindOptions::new(&t.dir_a).sort(SortMode::DepthOrder)).expect("find failed");
    assert!(entries.windows(2).all(|w| w[0].depth <= w[1].depth));
}

#[test]
fn test_no_recurse_failed_hides_passing_descendants() {
    let t = create_tree();
    // dirAB fails, but its descendant dirABA would pass.
    let options = FindOptions::new(&t.dir_a)
        .test(|e: &Entry| e.name != "dirAB")
        .no_recurse_failed(true);
    let found = set(&find(&options).expect("find failed"));

    assert!(!found.contains(&t.dir_ab));
    assert!(!found.contains(&t.dir_aba));
    assert!(!found.contains(&t.file_ab1));
    assert!(!found.contains(&t.file_aba1));
    assert!(found.contains(&t.file_aab1));
}

#[test]
fn test_predicates_see_entry_metadata() {
    let t = create_tree();
    let options = FindOptions::new(&t.dir_a).test(|e: &Entry| e.depth == 2 && e.is_dir());
    let found = find(&options).expect("find failed");
    assert_eq!(
        found,
        vec![t.dir_aaa.clone(), t.dir_aab.clone(), t.dir_aba.clone()]
    );
}

#[test]
fn test_missing_root() {
    let err = find(&FindOptions::default()).unwrap_err();
    assert!(matches!(err, FindError::MissingRoot));
    assert!(err.to_string().contains("Must provide 'root'"));
}

#[test]
fn test_root_must_exist() {
    let t = create_tree();
    let missing = t.dir_a.join("some-random-name");
    let err = find(&FindOptions::new(&missing)).unwrap_err();
    assert!(matches!(err, FindError::RootNotFound(_)));
    assert!(err.to_string().contains("some-random-name"));
}

#[test]
fn test_root_cannot_be_a_file() {
    let t = create_tree();
    let err = find(&FindOptions::new(&t.file_ab1)).unwrap_err();
    assert!(matches!(err, FindError::RootNotDirectory(_)));
    assert!(err.to_string().contains("fileAB-1.txt"));
    assert!(err.to_string().contains("directory as required"));
}

#[test]
fn test_at_depth_requires_depth() {
    let t = create_tree();
    let err = find(&FindOptions::new(&t.dir_a).at_depth(true)).unwrap_err();
    assert!(matches!(err, FindError::MissingDepthForAtDepth));
}

#[test]
fn test_multiple_only_flags() {
    let t = create_tree();
    let err = find(&FindOptions::new(&t.dir_a).only_files(true).only_dirs(true)).unwrap_err();
    assert!(matches!(err, FindError::ConflictingOnlyFilters(_)));
    assert!(err.to_string().contains("multiple 'only'"));
}

#[test]
fn test_only_flag_with_no_recurse_failed() {
    let t = create_tree();
    let err = find(
        &FindOptions::new(&t.dir_a)
            .only_files(true)
            .no_recurse_failed(true),
    )
    .unwrap_err();
    assert!(matches!(err, FindError::OnlyFilterWithNoRecurseFailed));
}

#[test]
fn test_configuration_errors_precede_root_check() {
    // The root does not exist, but the configuration error wins.
    let err = find(&FindOptions::new(Path::new("/definitely/not/here")).at_depth(true))
        .unwrap_err();
    assert!(matches!(err, FindError::MissingDepthForAtDepth));
}
