use clap::Parser;
use framediff::cli::{Cli, Commands};
use framediff::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();
    let config = cli.load_config()?;

    match cli.command {
        Commands::Pixels(args) => framediff::cli::pixels::run(args, &config, &printer)?,
        Commands::Sequence(args) => framediff::cli::sequence::run(args, &config, &printer)?,
        Commands::Points(args) => framediff::cli::points::run(args, &config, &printer)?,
        Commands::Edges(args) => framediff::cli::edges::run(args, &printer)?,
        Commands::Completions(args) => framediff::cli::completions::run(args)?,
    }

    Ok(())
}
