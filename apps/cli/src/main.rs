//! Entry point: parse CLI and dispatch to command handlers.

use std::process::ExitCode;

use clap::Parser;
use tally_cli::cli::Cli;

/// Run the CLI.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tally_cli::init_tracing(cli.verbose);

    match tally_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
