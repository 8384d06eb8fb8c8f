//! List command implementation.
//!
//! Compiles sources and prints the documented groups and endpoints.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Document;

use super::{compile, resolve};

/// List documented groups and endpoints
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Source directory or file (default: manifest sources, or src/api)
    pub source: Option<PathBuf>,

    /// Project root containing apidoc.yaml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let discovery = resolve(&args.root, args.source.as_deref())?;
    let report = compile(&discovery, false);

    for failure in &report.failures {
        printer.warning("Skipped", &format!("{}: {}", failure.path, failure.error));
    }

    print!("{}", render_listing(&report.document));

    printer.info(
        "Listed",
        &format!(
            "{} in {}",
            plural(report.document.endpoint_count(), "endpoint", "endpoints"),
            plural(report.document.len(), "group", "groups")
        ),
    );

    Ok(())
}

/// One line per group, then one indented line per endpoint.
///
/// Titles are cut to their first line.
pub fn render_listing(document: &Document) -> String {
    let mut out = String::new();

    for (name, group) in document.groups() {
        if group.url.is_empty() {
            let _ = writeln!(out, "{name}");
        } else {
            let _ = writeln!(out, "{name} {}", group.url);
        }

        for endpoint in &group.endpoints {
            let title = endpoint.title.lines().next().unwrap_or("");
            let line = format!("  {:<7} {} {}", endpoint.method.as_str(), endpoint.url, title);
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }

    out
}
