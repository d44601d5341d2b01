//! Shared fixtures for integration tests
//!
//! `walkdir` serves as an independent oracle: it walks the same tree without going
//! through the crate's traversal, so listing and purge results can be checked against it.

use projtree::filter::is_service_entry;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Create each `(relative path, content)` file under `root`, with parent directories.
pub fn build_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// The tree from the reference scenario: `a/.git/config`, `a/readme.txt`, `a/sub/old.json`.
/// Returns the temp dir guard and the path of `a`.
pub fn sample_project() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("a");
    build_tree(
        &root,
        &[
            (".git/config", "[core]\n"),
            ("readme.txt", "Read me 1st"),
            ("sub/old.json", "{\"v\": 1}"),
        ],
    );
    (temp_dir, root)
}

fn is_service_path(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0 && is_service_entry(&entry.file_name().to_string_lossy())
}

/// Files reachable from `root` through non-service directories, sorted.
pub fn reachable_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_service_path(e))
        .filter_map(Result::ok)
        .filter(|e| !e.file_type().is_dir())
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Non-service directories reachable from `root` (root excluded), sorted.
pub fn reachable_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_service_path(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.into_path())
        .collect();
    dirs.sort();
    dirs
}

/// Service entries sitting directly in `root` or a reachable non-service directory, sorted.
pub fn reachable_service_entries(root: &Path) -> Vec<PathBuf> {
    let mut dirs = reachable_dirs(root);
    dirs.push(root.to_path_buf());
    let mut entries = Vec::new();
    for dir in dirs {
        for entry in fs::read_dir(&dir).unwrap() {
            let entry = entry.unwrap();
            if is_service_entry(&entry.file_name().to_string_lossy()) {
                entries.push(entry.path());
            }
        }
    }
    entries.sort();
    entries
}

/// Every path under `root` (service or not), relative to `root`, sorted.
pub fn snapshot(root: &Path) -> Vec<(PathBuf, bool)> {
    let mut all: Vec<(PathBuf, bool)> = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, e.file_type().is_dir())
        })
        .collect();
    all.sort();
    all
}

pub fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.sort();
    paths
}
