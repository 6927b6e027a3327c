//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Validation/SummaryError (core)   sqlx::Error / MigrateError            │
//! │       │                                │                                │
//! │       ▼                                ▼                                │
//! │  DbError::{Validation, Summary}  DbError::{StoreUnavailable, ...}      │
//! │       │                                │                                │
//! │       └──────────────┬─────────────────┘                                │
//! │                      ▼                                                  │
//! │  CliError (in app) ← exit code + message for the terminal               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `Validation` is recoverable. Everything else is surfaced as-is and
//! never retried inside this crate.

use sqlx::migrate::MigrateError;
use tally_core::{SummaryError, ValidationError};
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Input rejected before any write.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The stored amounts of a day cannot be totalled in i64 cents.
    #[error("Summary failed: {0}")]
    Summary(#[from] SummaryError),

    /// The store cannot be reached.
    ///
    /// ## When This Occurs
    /// - Database file can't be opened or created
    /// - File permissions issue, disk full
    /// - Pool closed or exhausted
    /// - Database locked by another writer past the busy timeout
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Schema creation failed.
    #[error("Schema setup failed: {0}")]
    Schema(String),

    /// Query execution failed.
    ///
    /// ## When This Occurs
    /// - A CHECK or UNIQUE constraint fired
    /// - Row decoding failed
    #[error("Query failed: {0}")]
    Query(String),
}

impl DbError {
    /// True when the caller can fix its input and try again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DbError::Validation(_))
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (locked / can't open) → DbError::StoreUnavailable
/// sqlx::Error::Database (other)               → DbError::Query
/// sqlx::Error::Io / PoolTimedOut / PoolClosed → DbError::StoreUnavailable
/// Other                                       → DbError::Query
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                if msg.contains("database is locked") || msg.contains("unable to open") {
                    DbError::StoreUnavailable(msg.to_string())
                } else {
                    DbError::Query(msg.to_string())
                }
            }

            sqlx::Error::Io(io_err) => DbError::StoreUnavailable(io_err.to_string()),

            sqlx::Error::PoolTimedOut => {
                DbError::StoreUnavailable("Connection pool exhausted".to_string())
            }

            sqlx::Error::PoolClosed => DbError::StoreUnavailable("Pool is closed".to_string()),

            _ => DbError::Query(err.to_string()),
        }
    }
}

/// Convert migration errors to DbError.
///
/// A migration that fails because the store went away is classified like
/// any other lost connection; every other failure is a schema error.
impl From<MigrateError> for DbError {
    fn from(err: MigrateError) -> Self {
        let message = err.to_string();

        let inner = match err {
            MigrateError::Execute(inner) | MigrateError::ExecuteMigration(inner, _) => inner,
            _ => return DbError::Schema(message),
        };

        match DbError::from(inner) {
            unavailable @ DbError::StoreUnavailable(_) => unavailable,
            _ => DbError::Schema(message),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_validation_is_recoverable() {
        let err: DbError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Invalid input: name is required");

        assert!(!DbError::StoreUnavailable("gone".to_string()).is_recoverable());
        assert!(!DbError::Schema("bad".to_string()).is_recoverable());
        assert!(!DbError::Query("bad".to_string()).is_recoverable());
    }

    #[test]
    fn test_pool_errors_map_to_store_unavailable() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::StoreUnavailable(_)
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::StoreUnavailable(_)
        ));
    }

    #[test]
    fn test_migration_connection_loss_is_store_unavailable() {
        assert!(matches!(
            DbError::from(MigrateError::Execute(sqlx::Error::PoolClosed)),
            DbError::StoreUnavailable(_)
        ));
        assert!(matches!(
            DbError::from(MigrateError::ExecuteMigration(sqlx::Error::PoolTimedOut, 1)),
            DbError::StoreUnavailable(_)
        ));
    }

    #[test]
    fn test_other_migration_failures_are_schema_errors() {
        assert!(matches!(
            DbError::from(MigrateError::Execute(sqlx::Error::RowNotFound)),
            DbError::Schema(_)
        ));
        assert!(matches!(
            DbError::from(MigrateError::VersionMissing(1)),
            DbError::Schema(_)
        ));
    }

    #[test]
    fn test_summary_overflow_is_not_recoverable() {
        let err = DbError::from(SummaryError::RowOverflow { sale_id: 3 });
        assert!(!err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "Summary failed: amounts of sale 3 are too large to total"
        );
    }

    #[test]
    fn test_row_not_found_maps_to_query() {
        assert!(matches!(
            DbError::from(sqlx::Error::RowNotFound),
            DbError::Query(_)
        ));
    }
}
