//! # CLI Error Type
//!
//! Unified error type for commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  ConfigError ──┐                                                        │
//! │  DbError ──────┼──► CliError ──► "Error: <message>" on stderr           │
//! │  io / json ────┘        │                                               │
//! │                         └──────► exit code                              │
//! │                                   2 = bad input, fix and retry          │
//! │                                   1 = anything else                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tally_db::DbError;

use crate::config::ConfigError;

/// Exit code for input the user can correct.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Exit code for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Errors surfaced by `tally` commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Db(#[from] DbError),

    /// A sale was attempted before any product was registered.
    #[error("No products yet: add one first with `tally product save <NAME> <COST>`")]
    NoProducts,

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Db(e) if e.is_recoverable() => EXIT_INVALID_INPUT,
            CliError::NoProducts => EXIT_INVALID_INPUT,
            _ => EXIT_FAILURE,
        }
    }
}
