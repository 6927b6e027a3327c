//! # Sale Repository
//!
//! Database operations for sales.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  1. RECORD                                                              │
//! │     └── insert_sale() → Sale { id: fresh, never reused }               │
//! │                                                                         │
//! │  2. READ                                                                │
//! │     └── list_sales_for_date() → newest first                           │
//! │                                                                         │
//! │  3. (OPTIONAL) DELETE                                                   │
//! │     └── delete_sale(id) → row gone; a missing id is a no-op            │
//! │                                                                         │
//! │  There is no update: a wrong entry is deleted and recorded again.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tally_core::validation::{validate_quantity, validate_sale_amount, validate_sale_price};
use tally_core::{Money, Sale};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Records a sale.
    ///
    /// ## Arguments
    /// * `date` - Calendar day of the sale
    /// * `product` - Product name, stored as given (existence is not checked)
    /// * `quantity` - Units sold, must be > 0
    /// * `sale_price` - Price per unit, must be >= 0
    ///
    /// ## Returns
    /// * `Ok(Sale)` - The stored row with its new id
    /// * `Err(DbError::Validation)` - Bad quantity or price, or a revenue too
    ///   large for i64 cents; nothing written
    pub async fn insert_sale(
        &self,
        date: NaiveDate,
        product: &str,
        quantity: i64,
        sale_price: Money,
    ) -> DbResult<Sale> {
        validate_quantity(quantity)?;
        validate_sale_price(sale_price)?;
        validate_sale_amount(quantity, sale_price)?;

        debug!(%date, product = %product, quantity, price = %sale_price, "Inserting sale");

        let sale = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (sale_date, product, quantity, sale_price_cents, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, sale_date, product, quantity, sale_price_cents, created_at
            "#,
        )
        .bind(date)
        .bind(product)
        .bind(quantity)
        .bind(sale_price)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Deletes a sale by id.
    ///
    /// ## Returns
    /// * `Ok(true)` - The row existed and was removed
    /// * `Ok(false)` - No such id; nothing happened
    pub async fn delete_sale(&self, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM sales WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        debug!(id, deleted, "Deleted sale");

        Ok(deleted)
    }

    /// Lists the sales of one day, most recently inserted first.
    pub async fn list_sales_for_date(&self, date: NaiveDate) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, sale_date, product, quantity, sale_price_cents, created_at
            FROM sales
            WHERE sale_date = ?1
            ORDER BY id DESC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Gets a sale by id.
    pub async fn get_sale(&self, id: i64) -> DbResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, sale_date, product, quantity, sale_price_cents, created_at
            FROM sales
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Counts sales (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
