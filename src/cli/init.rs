//! Init command implementation.
//!
//! Generates an `apidoc.yaml` manifest from the directories that hold
//! annotated sources.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{scan_directory, Manifest, MANIFEST_FILENAME};
use crate::error::{DocError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::extract_blocks;

/// Initialize an apidoc project by generating an apidoc.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing apidoc.yaml
    #[arg(long)]
    pub force: bool,
}

const DEFAULT_EXCLUDES: &[&str] = &["node_modules/*", "dist/*"];

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(DocError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));

    let scan_manifest = Manifest {
        excludes: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    };
    let scan = scan_directory(&args.path, &scan_manifest);

    // Keep directories whose files carry at least one @api tag
    let mut source_dirs = BTreeSet::new();
    let mut annotated = 0;
    for file in &scan.files {
        let Ok(text) = fs::read_to_string(file) else {
            continue;
        };
        let has_tags = extract_blocks("", &text)
            .iter()
            .any(|block| !block.lines.is_empty());
        if !has_tags {
            continue;
        }
        annotated += 1;

        if let Some(parent) = file.parent() {
            let relative = parent.strip_prefix(&args.path).unwrap_or(parent);
            let dir = relative.to_string_lossy().replace('\\', "/");
            source_dirs.insert(if dir.is_empty() { ".".to_string() } else { dir });
        }
    }

    // Build YAML manually for clean formatting
    let mut yaml = String::new();

    if !source_dirs.is_empty() {
        yaml.push_str("sources:\n");
        for dir in &source_dirs {
            yaml.push_str(&format!("  - \"{}\"\n", dir));
        }
    }

    yaml.push_str(&format!("output: {}\n", scan_manifest.output.display()));
    yaml.push_str("excludes:\n");
    for pattern in DEFAULT_EXCLUDES {
        yaml.push_str(&format!("  - \"{}\"\n", pattern));
    }

    fs::write(&manifest_path, &yaml).map_err(|e| DocError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !source_dirs.is_empty() {
        let dirs: Vec<&str> = source_dirs.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.success(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(annotated, "annotated file", "annotated files")
        ),
    );

    Ok(())
}
