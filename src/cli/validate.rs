//! Validate command implementation.
//!
//! Parses every source and reports annotation errors without writing output.

use std::path::PathBuf;

use clap::Args;

use crate::error::{DocError, Result};
use crate::output::{plural, Printer};

use super::{compile, resolve};

/// Check annotations without writing output
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Source directory or file (default: manifest sources, or src/api)
    pub source: Option<PathBuf>,

    /// Project root containing apidoc.yaml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let discovery = resolve(&args.root, args.source.as_deref())?;
    let report = compile(&discovery, false);

    for failure in &report.failures {
        printer.error("Invalid", &format!("{}: {}", failure.path, failure.error));
    }

    if report.has_failures() {
        return Err(DocError::Validation {
            message: format!(
                "{} of {} failed",
                plural(report.failures.len(), "file", "files"),
                report.files
            ),
            help: None,
        });
    }

    printer.success(
        "Validated",
        &format!(
            "{} ({} in {})",
            plural(report.files, "file", "files"),
            plural(report.document.endpoint_count(), "endpoint", "endpoints"),
            plural(report.document.len(), "group", "groups")
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_clean_sources() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("dogs.js");
        fs::write(&file, "/**\n * @api {get} /api/dogs Dogs\n */\n").unwrap();

        let args = ValidateArgs {
            source: Some(file),
            root: dir.path().to_path_buf(),
        };

        assert!(run(args, &Printer::new()).is_ok());
    }

    #[test]
    fn test_validate_reports_grammar_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("dogs.js");
        fs::write(
            &file,
            "/**\n * @api {get} /api/dogs Dogs\n * @apiDefineGroup (Dogs)\n */\n",
        )
        .unwrap();

        let args = ValidateArgs {
            source: Some(file),
            root: dir.path().to_path_buf(),
        };
        let result = run(args, &Printer::new());

        match result {
            Err(DocError::Validation { message, .. }) => assert_eq!(message, "1 file of 1 failed"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_project() {
        let dir = tempdir().unwrap();

        let args = ValidateArgs {
            source: None,
            root: dir.path().to_path_buf(),
        };

        assert!(run(args, &Printer::new()).is_ok());
    }
}
