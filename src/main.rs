use apidoc::cli::{Cli, Commands};
use apidoc::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => apidoc::cli::build::run(args, &printer)?,
        Commands::Init(args) => apidoc::cli::init::run(args, &printer)?,
        Commands::Validate(args) => apidoc::cli::validate::run(args, &printer)?,
        Commands::List(args) => apidoc::cli::list::run(args, &printer)?,
        Commands::Completions(args) => apidoc::cli::completions::run(args)?,
    }

    Ok(())
}
