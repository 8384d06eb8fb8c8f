//! Cross-file aggregation.
//!
//! Each file is parsed into its own fragment, independently of every other
//! file. Fragments are then folded into the final document strictly in the
//! order the files were supplied, since group urls are first-wins and group
//! descriptions concatenate.
//!
//! A file that fails to parse contributes nothing; its failure is reported
//! next to the document instead of aborting the run.
//!
//! # Example
//!
//! ```ignore
//! use apidoc::aggregate::{aggregate, SourceFile};
//!
//! let files = vec![SourceFile::new("src/api/dogs.js", source)];
//! let report = aggregate(&files);
//! for failure in &report.failures {
//!     eprintln!("{}: {}", failure.path, failure.error);
//! }
//! ```

mod file;

use rayon::prelude::*;

use crate::error::DocError;
use crate::types::Document;

pub use file::{aggregate_file, fold_contributions};

/// One input file: its path (as it should appear in `src`) and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// A file that contributed nothing because of an error.
#[derive(Debug)]
pub struct FileFailure {
    pub path: String,
    pub error: DocError,
}

/// Result of parsing one file.
#[derive(Debug)]
pub enum FileOutcome {
    Parsed(Document),
    Failed(FileFailure),
}

/// Parse a single file into an outcome.
pub fn parse_source(file: &SourceFile) -> FileOutcome {
    match aggregate_file(&file.path, &file.text) {
        Ok(document) => FileOutcome::Parsed(document),
        Err(error) => FileOutcome::Failed(FileFailure {
            path: file.path.clone(),
            error,
        }),
    }
}

/// The final document plus every file that failed.
#[derive(Debug, Default)]
pub struct AggregateReport {
    pub document: Document,
    pub failures: Vec<FileFailure>,
    /// Number of files folded (successful or not).
    pub files: usize,
}

impl AggregateReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Number of files that parsed.
    pub fn parsed(&self) -> usize {
        self.files - self.failures.len()
    }
}

/// Fold outcomes into a report, in iteration order.
pub fn fold_outcomes(outcomes: impl IntoIterator<Item = FileOutcome>) -> AggregateReport {
    let mut report = AggregateReport::default();

    for outcome in outcomes {
        report.files += 1;
        match outcome {
            FileOutcome::Parsed(fragment) => report.document.merge(fragment),
            FileOutcome::Failed(failure) => report.failures.push(failure),
        }
    }

    report
}

/// Parse and fold files one after another.
pub fn aggregate(files: &[SourceFile]) -> AggregateReport {
    fold_outcomes(files.iter().map(parse_source))
}

/// Parse files on the rayon pool, then fold in the original order.
///
/// Produces the same report as [`aggregate`].
pub fn aggregate_parallel(files: &[SourceFile]) -> AggregateReport {
    let outcomes: Vec<FileOutcome> = files.par_iter().map(parse_source).collect();
    fold_outcomes(outcomes)
}
