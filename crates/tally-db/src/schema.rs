//! # Schema
//!
//! Embedded SQL migrations that create the `products` and `sales` tables.
//!
//! ## How Schema Setup Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ensure_schema()                                    │
//! │                                                                         │
//! │  Startup                                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Check _sqlx_migrations table (create if missing)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  001_initial_schema.sql applied?                                        │
//! │       ├── yes → nothing to do                                           │
//! │       └── no  → CREATE TABLE IF NOT EXISTS products / sales             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Continue startup (or surface DbError::Schema, never retried)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/sqlite/` with the next sequence number
//! 2. Name format: `NNN_description.sql`
//! 3. Write idempotent SQL (use `IF NOT EXISTS` where possible)
//! 4. **NEVER** modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the workspace `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Creates the tables if they are absent.
///
/// ## Safety
/// - Idempotent: safe to run on every startup
/// - Transactional: each migration runs in a transaction
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("Schema is up to date");
    Ok(())
}

/// Returns `(total_migrations, applied_migrations)` for diagnostics.
pub async fn schema_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await?;

    Ok((total, applied as usize))
}
