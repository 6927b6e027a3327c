//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Upsert by Name
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  upsert_product("  Widget ", 5.00)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  normalize_product_name → "Widget"      validate_cost(5.00) ✓           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT ... ON CONFLICT(name) DO UPDATE SET cost_cents = excluded...    │
//! │       │                                                                 │
//! │       ├── "Widget" absent  → new row                                    │
//! │       └── "Widget" present → cost replaced (last write wins)            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tally_core::validation::{normalize_product_name, validate_cost};
use tally_core::{Money, Product};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a product or replaces the cost of the existing one.
    ///
    /// ## Arguments
    /// * `name` - Product name; surrounding whitespace is trimmed
    /// * `cost` - Production cost per unit, must be >= 0
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored row
    /// * `Err(DbError::Validation)` - Empty name or negative cost; nothing written
    pub async fn upsert_product(&self, name: &str, cost: Money) -> DbResult<Product> {
        let name = normalize_product_name(name)?;
        validate_cost(cost)?;

        debug!(name = %name, cost = %cost, "Upserting product");

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, cost_cents, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (name) DO UPDATE SET
                cost_cents = excluded.cost_cents,
                updated_at = excluded.updated_at
            RETURNING name, cost_cents, updated_at
            "#,
        )
        .bind(&name)
        .bind(cost)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists all products ordered by name (binary collation, case-sensitive).
    pub async fn list_products(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT name, cost_cents, updated_at
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its exact name.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No product with that name
    pub async fn get_product(&self, name: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT name, cost_cents, updated_at
            FROM products
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
