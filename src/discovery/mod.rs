//! Source discovery for apidoc projects.
//!
//! Finds annotated source files either from an `apidoc.yaml` manifest or
//! from the default `src/api` folder, and reads them into memory.
//!
//! # Example
//!
//! ```ignore
//! use apidoc::discovery::discover;
//!
//! let result = discover(".")?;
//! println!("Found {} files", result.scan.total());
//!
//! let loaded = result.load();
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::{load_sources, source_name, LoadedSources};
pub use manifest::Manifest;
pub use scanner::{scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "apidoc.yaml";

/// Result of discovering sources in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no apidoc.yaml was found).
    pub manifest: Manifest,

    /// Whether an apidoc.yaml manifest was found.
    pub has_manifest: bool,

    /// Source directories that were scanned, resolved against the root.
    pub source_dirs: Vec<PathBuf>,

    /// Scan results with discovered files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Whether at least one source directory exists.
    pub fn has_sources(&self) -> bool {
        self.source_dirs.iter().any(|dir| dir.exists())
    }

    /// Read every discovered file.
    pub fn load(&self) -> LoadedSources {
        load_sources(&self.scan)
    }
}

/// Discover sources in a project directory.
///
/// Looks for an `apidoc.yaml` manifest in the root directory and scans its
/// source directories; without one, scans `src/api` under the root.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();
    let (manifest, has_manifest) = load_manifest(&root)?;

    let sources = manifest.effective_sources();
    let source_dirs = sources.iter().map(|s| root.join(s)).collect();
    let scan = scan_sources(&sources, &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        source_dirs,
        scan,
    })
}

/// Load `apidoc.yaml` from `root`, or the defaults when there is none.
///
/// The flag says whether a manifest file was found.
pub fn load_manifest(root: &Path) -> Result<(Manifest, bool)> {
    let manifest_path = root.join(MANIFEST_FILENAME);
    if manifest_path.exists() {
        Ok((Manifest::load(&manifest_path)?, true))
    } else {
        Ok((Manifest::default(), false))
    }
}

/// Discover sources from explicit paths (directories or single files).
///
/// The manifest is only used for its extension and exclude lists.
pub fn discover_paths(paths: &[PathBuf], manifest: Manifest) -> DiscoveryResult {
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else if path.is_file() {
            scan.merge(ScanResult {
                files: vec![path.clone()],
            });
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        source_dirs: paths.to_vec(),
        scan,
    }
}
