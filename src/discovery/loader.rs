//! Source loader: reads discovered files into memory.

use std::fs;
use std::path::{Component, Path};

use crate::aggregate::{FileFailure, SourceFile};
use crate::error::DocError;

use super::scanner::ScanResult;

/// Files that were read, plus the ones that could not be.
#[derive(Debug, Default)]
pub struct LoadedSources {
    pub files: Vec<SourceFile>,
    pub failures: Vec<FileFailure>,
}

/// Read every scanned file, in scan order.
///
/// A file that cannot be read (permissions, invalid UTF-8) becomes a
/// failure and the rest still load.
pub fn load_sources(scan: &ScanResult) -> LoadedSources {
    let mut loaded = LoadedSources::default();

    for path in &scan.files {
        let name = source_name(path);
        match fs::read_to_string(path) {
            Ok(text) => loaded.files.push(SourceFile::new(name, text)),
            Err(e) => loaded.failures.push(FileFailure {
                path: name,
                error: DocError::Io {
                    path: path.clone(),
                    message: format!("Failed to read source: {}", e),
                },
            }),
        }
    }

    loaded
}

/// The `src` string recorded for a file: forward slashes, no leading `./`.
pub fn source_name(path: &Path) -> String {
    let trimmed: std::path::PathBuf = path
        .components()
        .skip_while(|c| matches!(c, Component::CurDir))
        .collect();
    trimmed.to_string_lossy().replace('\\', "/")
}
