//! Build command implementation.
//!
//! Discovers annotated sources, aggregates them and writes apidocs.json.

use std::path::PathBuf;

use clap::Args;

use crate::error::{DocError, Result};
use crate::output::{display_path, plural, to_json, write_document, Printer};

use super::{compile, resolve};

/// Compile annotated sources into apidocs.json
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Source directory or file (default: manifest sources, or src/api)
    pub source: Option<PathBuf>,

    /// Output file (default: manifest output, or dist/api/apidocs.json)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Project root containing apidoc.yaml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Parse files one at a time
    #[arg(long)]
    pub serial: bool,

    /// Fail if any file could not be compiled
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let discovery = resolve(&args.root, args.source.as_deref())?;

    if !discovery.has_sources() {
        let missing: Vec<String> = discovery
            .source_dirs
            .iter()
            .map(|dir| display_path(dir))
            .collect();
        printer.warning("Skipping", &format!("no sources at {}", missing.join(", ")));
        return Ok(());
    }

    printer.status(
        "Compiling",
        &plural(discovery.scan.total(), "source file", "source files"),
    );

    let report = compile(&discovery, args.serial);

    for failure in &report.failures {
        printer.warning("Skipped", &format!("{}: {}", failure.path, failure.error));
    }

    if args.strict && report.has_failures() {
        return Err(DocError::Validation {
            message: format!(
                "{} could not be compiled",
                plural(report.failures.len(), "file", "files")
            ),
            help: Some("Fix the annotations above or build without --strict".to_string()),
        });
    }

    let pretty = args.pretty || discovery.manifest.pretty;

    if args.stdout {
        println!("{}", to_json(&report.document, pretty)?);
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.root.join(&discovery.manifest.output));
    write_document(&report.document, &output, pretty)?;

    printer.success(
        "Finished",
        &format!(
            "{} in {} from {} to {}",
            plural(report.document.endpoint_count(), "endpoint", "endpoints"),
            plural(report.document.len(), "group", "groups"),
            plural(report.parsed(), "file", "files"),
            display_path(&output)
        ),
    );

    Ok(())
}
