use bsp_loader::cli::{Cli, Commands};
use bsp_loader::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();
    let root = cli.root.as_path();

    match cli.command {
        Commands::Missions(args) => bsp_loader::cli::missions::run(args, root, &printer)?,
        Commands::Generate(args) => bsp_loader::cli::generate::run(args, root, &printer)?,
        Commands::Deps(args) => bsp_loader::cli::deps::run(args, root, &printer)?,
        Commands::Validate(args) => bsp_loader::cli::validate::run(args, root, &printer)?,
        Commands::Init(args) => bsp_loader::cli::init::run(args, root, &printer)?,
        Commands::Completions(args) => bsp_loader::cli::completions::run(args)?,
    }

    Ok(())
}
