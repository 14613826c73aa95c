//! Curator CLI - submit article batches and print the catalog.

mod cli;
mod commands;
mod store;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Submit { batch, library } => commands::submit::run(batch, library, cli.verbose),

        Commands::Prepare { batch, json } => commands::prepare::run(batch, json, cli.verbose),

        Commands::Catalog { library } => commands::catalog::run(library, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the fmt subscriber. `RUST_LOG` wins over the verbose flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
