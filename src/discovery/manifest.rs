//! Project manifest (apidoc.yaml) parsing.
//!
//! The manifest says where annotated sources live, which extensions to read
//! and where the document is written.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocError, Result};

/// Project manifest loaded from apidoc.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan, in order.
    pub sources: Vec<String>,

    /// Path of the generated JSON document.
    pub output: PathBuf,

    /// File extensions (without the dot) that may carry annotations.
    pub extensions: Vec<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Pretty-print the JSON output.
    pub pretty: bool,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec!["src/api".to_string()],
            output: PathBuf::from("dist/api/apidocs.json"),
            extensions: vec!["js".to_string(), "api".to_string()],
            excludes: vec![],
            pretty: false,
        }
    }
}

impl Manifest {
    /// Load manifest from an apidoc.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DocError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| DocError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check apidoc.yaml syntax".to_string()),
        })
    }

    /// Get the effective source directories.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            Self::default().sources
        } else {
            self.sources.clone()
        }
    }

    /// Whether a file extension is one we read.
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.trim_start_matches('.') == ext))
    }

    /// Check if a path matches any exclude pattern.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy().replace('\\', "/");
        self.excludes
            .iter()
            .any(|pattern| matches_exclude(&path, pattern))
    }
}

/// Exclude pattern matching.
///
/// Supported forms: `*.ext` (suffix), `dir/*` and `**/dir/*` (anything under
/// a directory named `dir`), and a bare string (substring).
fn matches_exclude(path: &str, pattern: &str) -> bool {
    let pattern = pattern.strip_prefix("**/").unwrap_or(pattern);

    if let Some(dir) = pattern.strip_suffix("/*") {
        let dir = format!("{dir}/");
        return path.starts_with(&dir) || path.contains(&format!("/{dir}"));
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !suffix.contains('/') {
            return path.ends_with(suffix);
        }
    }

    path.contains(pattern)
}
