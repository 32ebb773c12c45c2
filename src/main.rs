//! chart-harvest - create a component version out of a Helm chart

use chart_harvest::cli::{Cli, Commands};
use chart_harvest::{commands, logging};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
