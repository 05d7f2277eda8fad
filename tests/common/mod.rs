// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed sandbox so each integration test can
// exercise the scaffolder against an isolated filesystem without repeating
// boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// An isolated scratch area for scaffolding targets, backed by a
/// [`tempfile::TempDir`] that is deleted when dropped.
pub struct ScaffoldSandbox {
    /// Temporary directory the test scaffolds into.
    pub root: tempfile::TempDir,
}

impl ScaffoldSandbox {
    /// Create a new empty sandbox.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path of a not-yet-created scaffolding target inside the sandbox.
    pub fn target(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Create `name` as an existing empty directory and return its path.
    pub fn empty_dir(&self, name: &str) -> PathBuf {
        let path = self.target(name);
        std::fs::create_dir_all(&path).expect("create empty dir");
        path
    }

    /// Create `name` as a directory containing one file and return its path.
    pub fn non_empty_dir(&self, name: &str) -> PathBuf {
        let path = self.empty_dir(name);
        std::fs::write(path.join("keep.txt"), "already here").expect("write existing file");
        path
    }
}

/// Relative paths of every file under `root`, sorted, with `/` separators.
pub fn files_under(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in std::fs::read_dir(dir).expect("read dir") {
            let entry = entry.expect("read entry");
            let path = entry.path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).expect("strip prefix");
                out.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

/// Assert that the tree under `target` is exactly the embedded template:
/// the same relative paths, with byte-identical contents.
pub fn assert_matches_template(target: &Path) {
    let mut expected = create_vueyouse::template::paths();
    expected.sort();
    assert_eq!(files_under(target), expected, "file inventory mismatch");

    for rel in &expected {
        let on_disk = std::fs::read(target.join(rel)).expect("read scaffolded file");
        let embedded = create_vueyouse::template::read(rel).expect("read embedded file");
        assert_eq!(on_disk, embedded, "content mismatch in {rel}");
    }
}
