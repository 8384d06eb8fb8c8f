//! apidoc - API annotation compiler
//!
//! A library for turning `@api` annotation comments embedded in source files
//! into a single JSON document of endpoints grouped by name.
//!
//! # Example
//!
//! ```ignore
//! use apidoc::{aggregate, SourceFile};
//!
//! let report = aggregate(&[SourceFile::new("src/api/dogs.js", source)]);
//! let json = serde_json::to_string(&report.document)?;
//! ```

pub mod aggregate;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;

pub use aggregate::{aggregate, aggregate_file, aggregate_parallel, AggregateReport, FileFailure, SourceFile};
pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest, ScanResult};
pub use error::{DocError, Result};
pub use output::{to_json, write_document};
pub use parser::{extract_blocks, parse_contributions, Contribution, DocBlock};
pub use types::{
    Document, Endpoint, Example, Group, GroupDefinition, HttpMethod, Param, ParamType,
    PermissionKind, Permissions, StatusExamples,
};
