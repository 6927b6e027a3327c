//! # Tally CLI Library
//!
//! Everything behind the `tally` binary: argument parsing, configuration,
//! logging setup and the command handlers.
//!
//! ## Module Organization
//! ```text
//! tally_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── Environment / --db configuration
//! ├── error.rs        ◄─── CliError and exit codes
//! └── commands/
//!     ├── product.rs  ◄─── product save / list
//!     ├── sale.rs     ◄─── sale add / list / delete
//!     └── summary.rs  ◄─── daily profit summary
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use std::io::{self, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ProductCmd, SaleCmd};
use commands::day_or_today;
use config::AppConfig;
use error::CliError;
use tally_db::Database;

/// Runs one CLI invocation.
///
/// ## Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Resolve configuration (--db, TALLY_* variables, data dir)           │
/// │  2. Open the database (schema ensured)                                  │
/// │  3. Run exactly one command, writing to stdout                          │
/// │  4. Close the pool                                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load(cli.db.clone())?;
    info!(db_path = %config.db_path.display(), "Configuration loaded");

    let db = Database::new(config.db_config()).await?;

    let mut out = io::stdout();
    let result = dispatch(&db, cli, &mut out).await;
    out.flush()?;

    db.close().await;
    result
}

/// Routes a parsed command to its handler.
pub async fn dispatch<W: Write>(db: &Database, cli: Cli, out: &mut W) -> Result<(), CliError> {
    let json = cli.json;
    debug!(command = ?cli.command, "Dispatching command");

    match cli.command {
        Commands::Product { cmd } => match cmd {
            ProductCmd::Save { name, cost } => {
                commands::product::save(db, &name, cost, json, out).await
            }
            ProductCmd::List => commands::product::list(db, json, out).await,
        },

        Commands::Sale { cmd } => match cmd {
            SaleCmd::Add {
                product,
                quantity,
                price,
                date,
            } => {
                commands::sale::add(
                    db,
                    day_or_today(date),
                    &product,
                    quantity,
                    price,
                    json,
                    out,
                )
                .await
            }
            SaleCmd::List { date } => {
                commands::sale::list(db, day_or_today(date), json, out).await
            }
            SaleCmd::Delete { id } => commands::sale::delete(db, id, json, out).await,
        },

        Commands::Summary { date } => {
            commands::summary::show(db, day_or_today(date), json, out).await
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: WARN only
/// - `--verbose`: debug for the tally crates
/// - `RUST_LOG` overrides both
///
/// Logs go to stderr; stdout carries command output only.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,tally=debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use commands::test_support::{db, text};

    async fn run_args(db: &Database, args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        dispatch(db, cli, &mut out).await?;
        Ok(text(out))
    }

    #[tokio::test]
    async fn test_full_day() {
        let db = db().await;

        run_args(&db, &["tally", "product", "save", "Widget", "5.00"])
            .await
            .unwrap();
        run_args(
            &db,
            &["tally", "sale", "add", "Widget", "3", "10", "--date", "2024-01-01"],
        )
        .await
        .unwrap();

        let report = run_args(&db, &["tally", "summary", "--date", "2024-01-01"])
            .await
            .unwrap();
        assert!(report.ends_with("Profit for 2024-01-01: $15.00\n"));
    }

    #[tokio::test]
    async fn test_validation_error_exit_code() {
        let db = db().await;

        let err = run_args(&db, &["tally", "product", "save", "   ", "1"])
            .await
            .unwrap_err();

        assert_eq!(err.exit_code(), error::EXIT_INVALID_INPUT);
    }
}
