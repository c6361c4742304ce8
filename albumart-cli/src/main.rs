// albumart-cli/src/main.rs
//
// Entry point for the `albumart` binary.
//
// Responsibilities:
// - Parsing command-line arguments.
// - Installing the terminal (and optional file) logger.
// - Dispatching to the embed action or a subcommand.
// - Mapping the outcome to the process exit code (0 success, 1 failure).

use albumart_cli::logging::init_logging;
use albumart_cli::{report_error, run_convert, run_embed, run_extract, Cli, Commands};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }

    let result = match &cli.command {
        Some(Commands::Extract(args)) => run_extract(args),
        Some(Commands::Convert(args)) => run_convert(args),
        None => run_embed(&cli.embed),
    };

    if let Err(e) = result {
        report_error(&e);
        process::exit(1);
    }
}
