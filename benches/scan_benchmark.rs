use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rufind::{Entry, FindOptions, SortMode, find};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_test_directory_structure(dir: &Path, depth: usize, files_per_dir: usize) {
    if depth == 0 {
        return;
    }

    // Create files in current directory
    for i in 0..files_per_dir {
        let file_path = dir.join(format!("file_{}.txt", i));
        fs::write(&file_path, format!("Content of file {}", i)).unwrap();
    }

    // Create subdirectories
    for i in 0..3 {
        let subdir_path = dir.join(format!("subdir_{}", i));
        fs::create_dir_all(&subdir_path).unwrap();
        create_test_directory_structure(&subdir_path, depth - 1, files_per_dir);
    }
}

fn benchmark_sort_modes(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    // 5 levels deep, 10 files per directory
    create_test_directory_structure(root, 5, 10);

    let mut group = c.benchmark_group("sort_modes");
    for (name, mode) in [
        ("tree_order", SortMode::TreeOrder),
        ("depth_order", SortMode::DepthOrder),
        ("unordered", SortMode::Unordered),
    ] {
        let options = FindOptions::new(root).sort(mode);
        group.bench_function(name, |b| b.iter(|| find(black_box(&options)).unwrap()));
    }
    group.finish();
}

fn benchmark_filters(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    create_test_directory_structure(root, 5, 10);

    let only_files = FindOptions::new(root).only_files(true);
    c.bench_function("only_files", |b| {
        b.iter(|| find(black_box(&only_files)).unwrap())
    });

    let pruned = FindOptions::new(root)
        .test(|e: &Entry| e.is_root || e.name.ends_with('0'))
        .no_recurse_failed(true);
    c.bench_function("no_recurse_failed", |b| {
        b.iter(|| find(black_box(&pruned)).unwrap())
    });

    let shallow = FindOptions::new(root).depth(2);
    c.bench_function("depth_2", |b| b.iter(|| find(black_box(&shallow)).unwrap()));
}

criterion_group!(benches, benchmark_sort_modes, benchmark_filters);
criterion_main!(benches);
