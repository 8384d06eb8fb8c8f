//! File system scanner for discovering annotated sources.
//!
//! Recursively scans directories for files whose extension the manifest
//! accepts (`.js` and `.api` by default).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Result of scanning for source files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered files, sorted within each scanned root.
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another scan result into this one, keeping the other's files last.
    pub fn merge(&mut self, other: ScanResult) {
        let mut seen: HashSet<PathBuf> = self.files.iter().cloned().collect();
        for file in other.files {
            if seen.insert(file.clone()) {
                self.files.push(file);
            }
        }
    }
}

/// Scan a directory for annotated source files.
///
/// Walks the directory recursively. Paths are sorted so that the same tree
/// always yields the same order, which the aggregator depends on.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        if manifest.is_excluded(path) || !manifest.accepts_extension(path) {
            continue;
        }

        result.files.push(path.to_path_buf());
    }

    result.files.sort();
    result
}

/// Scan multiple source paths, relative to `base_path` unless absolute.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}
