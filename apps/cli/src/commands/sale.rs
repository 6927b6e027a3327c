//! # Sale Commands
//!
//! `tally sale add`, `tally sale list` and `tally sale delete`.
//!
//! ```text
//! sale add Widget 3 10.00
//!     │
//!     ├── no products registered? ──► CliError::NoProducts (nothing written)
//!     │
//!     └── insert_sale(today, "Widget", 3, 10.00) ──► "Recorded sale #7 ..."
//! ```

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;
use tally_core::Money;
use tally_db::Database;
use tracing::{info, warn};

use super::{currency, write_json};
use crate::error::CliError;

/// JSON body for `sale delete`.
#[derive(Debug, Serialize)]
struct DeleteOutcome {
    id: i64,
    deleted: bool,
}

/// Records a sale. Refuses when no product exists yet.
pub async fn add<W: Write>(
    db: &Database,
    date: NaiveDate,
    product: &str,
    quantity: i64,
    price: Money,
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    if db.products().count().await? == 0 {
        return Err(CliError::NoProducts);
    }

    if db.products().get_product(product).await?.is_none() {
        warn!(product = %product, "Recording sale for a product that is not registered");
    }

    let sale = db
        .sales()
        .insert_sale(date, product, quantity, price)
        .await?;

    info!(id = sale.id, "Sale recorded");

    if json {
        return write_json(out, &sale);
    }

    writeln!(
        out,
        "Recorded sale #{}: {} x {} @ {} on {}",
        sale.id,
        sale.quantity,
        sale.product,
        currency(sale.sale_price),
        sale.date
    )?;
    Ok(())
}

/// Lists the sales of one day, newest first.
pub async fn list<W: Write>(
    db: &Database,
    date: NaiveDate,
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let sales = db.sales().list_sales_for_date(date).await?;

    if json {
        return write_json(out, &sales);
    }

    if sales.is_empty() {
        writeln!(out, "No sales on {}", date)?;
        return Ok(());
    }

    writeln!(out, "{:>6}  {:<24} {:>6} {:>12}", "ID", "PRODUCT", "QTY", "PRICE")?;
    for sale in &sales {
        writeln!(
            out,
            "{:>6}  {:<24} {:>6} {:>12}",
            sale.id,
            sale.product,
            sale.quantity,
            currency(sale.sale_price)
        )?;
    }

    Ok(())
}

/// Deletes a sale. A missing id is reported, not treated as an error.
pub async fn delete<W: Write>(
    db: &Database,
    id: i64,
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let deleted = db.sales().delete_sale(id).await?;

    if json {
        return write_json(out, &DeleteOutcome { id, deleted });
    }

    if deleted {
        writeln!(out, "Deleted sale #{}", id)?;
    } else {
        writeln!(out, "No sale #{}; nothing deleted", id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{db, text};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_add_requires_products() {
        let db = db().await;
        let mut out = Vec::new();

        let err = add(&db, day(), "Widget", 1, Money::from_cents(100), false, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::NoProducts));
        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_list_delete() {
        let db = db().await;
        db.products()
            .upsert_product("Widget", Money::from_cents(500))
            .await
            .unwrap();

        let mut out = Vec::new();
        add(&db, day(), "Widget", 3, Money::from_cents(1000), false, &mut out)
            .await
            .unwrap();
        let recorded = text(out);
        assert!(recorded.starts_with("Recorded sale #"));
        assert!(recorded.contains("3 x Widget @ $10.00 on 2024-01-01"));

        let id = db.sales().list_sales_for_date(day()).await.unwrap()[0].id;

        let mut out = Vec::new();
        list(&db, day(), false, &mut out).await.unwrap();
        assert_eq!(text(out).lines().count(), 2);

        let mut out = Vec::new();
        delete(&db, id, false, &mut out).await.unwrap();
        delete(&db, id, false, &mut out).await.unwrap();
        assert_eq!(
            text(out),
            format!("Deleted sale #{id}\nNo sale #{id}; nothing deleted\n")
        );

        let mut out = Vec::new();
        list(&db, day(), false, &mut out).await.unwrap();
        assert_eq!(text(out), "No sales on 2024-01-01\n");
    }

    #[tokio::test]
    async fn test_add_allows_unregistered_product() {
        let db = db().await;
        db.products()
            .upsert_product("Widget", Money::from_cents(500))
            .await
            .unwrap();

        let mut out = Vec::new();
        add(&db, day(), "Gizmo", 1, Money::from_cents(100), true, &mut out)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["product"], "Gizmo");
        assert_eq!(value["date"], "2024-01-01");
    }

    #[tokio::test]
    async fn test_add_rejects_zero_quantity() {
        let db = db().await;
        db.products()
            .upsert_product("Widget", Money::from_cents(500))
            .await
            .unwrap();

        let mut out = Vec::new();
        let err = add(&db, day(), "Widget", 0, Money::from_cents(100), false, &mut out)
            .await
            .unwrap_err();

        assert_eq!(err.exit_code(), crate::error::EXIT_INVALID_INPUT);
        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_json() {
        let db = db().await;
        let mut out = Vec::new();

        delete(&db, 42, true, &mut out).await.unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["id"], 42);
        assert_eq!(value["deleted"], false);
    }
}
