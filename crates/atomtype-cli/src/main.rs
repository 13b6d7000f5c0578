mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("atomtype CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = match cli.command {
        Commands::Names(args) => {
            info!("Dispatching to 'names' command.");
            commands::names::run(args)
        }
        Commands::Table(args) => {
            info!("Dispatching to 'table' command.");
            commands::table::run(args)
        }
        Commands::VectorNames => {
            info!("Dispatching to 'vector-names' command.");
            commands::vector_names::run()
        }
    };

    if let Err(e) = &result {
        error!("Command failed: {}", e);
    }
    result
}
