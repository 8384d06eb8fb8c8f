pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod validate;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::aggregate::{aggregate, aggregate_parallel, AggregateReport};
use crate::discovery::{discover, discover_paths, load_manifest, DiscoveryResult};
use crate::error::Result;

/// apidoc - Compile API annotation comments into a JSON document
#[derive(Parser, Debug)]
#[command(name = "apidoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile annotated sources into apidocs.json
    Build(build::BuildArgs),

    /// Initialize an apidoc project (generates apidoc.yaml)
    Init(init::InitArgs),

    /// Check annotations without writing output
    Validate(validate::ValidateArgs),

    /// List documented groups and endpoints
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Resolve what to scan: an explicit source path, or the manifest's
/// sources under `root`.
pub(crate) fn resolve(root: &Path, source: Option<&Path>) -> Result<DiscoveryResult> {
    match source {
        Some(path) => {
            let (manifest, _) = load_manifest(root)?;
            Ok(discover_paths(&[path.to_path_buf()], manifest))
        }
        None => discover(root),
    }
}

/// Read and aggregate every discovered file.
///
/// Files that could not be read are reported alongside parse failures.
pub(crate) fn compile(discovery: &DiscoveryResult, serial: bool) -> AggregateReport {
    let loaded = discovery.load();

    let mut report = if serial {
        aggregate(&loaded.files)
    } else {
        aggregate_parallel(&loaded.files)
    };

    report.files += loaded.failures.len();
    let parse_failures = std::mem::take(&mut report.failures);
    report.failures = loaded.failures;
    report.failures.extend(parse_failures);

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parses_build() {
        let cli = Cli::try_parse_from(["apidoc", "build", "api", "-o", "out.json", "--pretty"])
            .unwrap();

        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.source.as_deref(), Some(Path::new("api")));
                assert_eq!(args.output.as_deref(), Some(Path::new("out.json")));
                assert!(args.pretty);
                assert!(!args.strict);
            }
            other => panic!("expected build, got {other:?}"),
        }
    }

    #[test]
    fn test_compile_reports_read_and_parse_failures() {
        let dir = tempdir().unwrap();
        let api = dir.path().join("src/api");
        fs::create_dir_all(&api).unwrap();
        fs::write(api.join("a.js"), "/**\n * @api {get} /a A\n */\n").unwrap();
        fs::write(api.join("b.js"), [0xff, 0xfe]).unwrap();
        fs::write(api.join("c.js"), "/**\n * @apiPermissions (nobody)\n */\n").unwrap();

        let discovery = resolve(dir.path(), None).unwrap();
        let report = compile(&discovery, true);

        assert_eq!(report.files, 3);
        assert_eq!(report.failures.len(), 2);
        assert!(report.failures[0].path.ends_with("b.js"));
        assert!(report.failures[1].path.ends_with("c.js"));
        assert_eq!(report.document.endpoint_count(), 1);
    }
}
