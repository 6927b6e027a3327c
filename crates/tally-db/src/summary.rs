//! # Summary Service
//!
//! Loads one day of sales plus the current product list and hands them to
//! [`tally_core::build_daily_summary`] for the join.
//!
//! ```text
//! daily_summary(date)
//!     │
//!     ├── sales.list_sales_for_date(date) ── empty? ──► DailySummary::empty
//!     │
//!     ├── products.list_products()
//!     │
//!     └── build_daily_summary(date, &sales, &products)
//! ```

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::DbResult;
use crate::repository::product::ProductRepository;
use crate::repository::sale::SaleRepository;
use tally_core::{build_daily_summary, DailySummary};

/// Computes daily profit summaries.
#[derive(Debug, Clone)]
pub struct SummaryService {
    products: ProductRepository,
    sales: SaleRepository,
}

impl SummaryService {
    pub fn new(products: ProductRepository, sales: SaleRepository) -> Self {
        SummaryService { products, sales }
    }

    /// Revenue, cost and profit of every sale on `date` whose product is
    /// registered. Sales of unknown products are left out and counted in
    /// `excluded_sales`.
    ///
    /// Fails with `DbError::Summary` when the amounts leave the i64 cents
    /// range, which a cost raised after the sale can still cause.
    pub async fn daily_summary(&self, date: NaiveDate) -> DbResult<DailySummary> {
        let sales = self.sales.list_sales_for_date(date).await?;
        if sales.is_empty() {
            debug!(%date, "No sales for date");
            return Ok(DailySummary::empty(date));
        }

        let products = self.products.list_products().await?;
        let summary = build_daily_summary(date, &sales, &products).map_err(|e| {
            warn!(%date, error = %e, "Daily summary overflowed");
            e
        })?;

        if summary.excluded_sales > 0 {
            debug!(
                %date,
                excluded = summary.excluded_sales,
                "Sales without a matching product left out of summary"
            );
        }

        Ok(summary)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use tally_core::Money;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_empty_day() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let summary = db.summaries().daily_summary(day()).await.unwrap();

        assert!(summary.is_empty());
        assert_eq!(summary.total_profit, Money::zero());
    }

    #[tokio::test]
    async fn test_widget_day() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
            .upsert_product("Widget", Money::from_cents(500))
            .await
            .unwrap();
        db.sales()
            .insert_sale(day(), "Widget", 3, Money::from_cents(1000))
            .await
            .unwrap();

        let summary = db.summaries().daily_summary(day()).await.unwrap();

        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.total_revenue, Money::from_cents(3000));
        assert_eq!(summary.total_cost, Money::from_cents(1500));
        assert_eq!(summary.total_profit, Money::from_cents(1500));
    }

    #[tokio::test]
    async fn test_cost_change_rewrites_history() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
            .upsert_product("Widget", Money::from_cents(500))
            .await
            .unwrap();
        db.sales()
            .insert_sale(day(), "Widget", 3, Money::from_cents(1000))
            .await
            .unwrap();

        db.products()
            .upsert_product("Widget", Money::from_cents(800))
            .await
            .unwrap();

        let summary = db.summaries().daily_summary(day()).await.unwrap();
        assert_eq!(summary.total_profit, Money::from_cents(600));
    }

    #[tokio::test]
    async fn test_cost_raised_past_range_is_an_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
            .upsert_product("Widget", Money::from_cents(100))
            .await
            .unwrap();
        db.sales()
            .insert_sale(day(), "Widget", 1_000_000, Money::from_cents(1_000_000_000))
            .await
            .unwrap();

        db.products()
            .upsert_product("Widget", Money::from_cents(i64::MAX / 1_000))
            .await
            .unwrap();

        let err = db.summaries().daily_summary(day()).await.unwrap_err();
        assert!(matches!(err, DbError::Summary(_)));
    }
}
