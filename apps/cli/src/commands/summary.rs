//! # Summary Command
//!
//! `tally summary [--date]`: one row per sale of a registered product,
//! then the day's profit.
//!
//! ```text
//! SALE                                   REVENUE        COST      PROFIT
//! ID 2 - Widget - 2 pcs - 12.00           $24.00      $10.00      $14.00
//! ID 1 - Widget - 3 pcs - 10.00           $30.00      $15.00      $15.00
//!
//! Profit for 2024-01-01: $29.00
//! ```

use std::io::Write;

use chrono::NaiveDate;
use tally_db::Database;

use super::{currency, write_json};
use crate::error::CliError;

/// Prints the daily profit summary for `date`.
pub async fn show<W: Write>(
    db: &Database,
    date: NaiveDate,
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let summary = db.summaries().daily_summary(date).await?;

    if json {
        return write_json(out, &summary);
    }

    if summary.is_empty() && summary.excluded_sales == 0 {
        writeln!(out, "No sales on {}", date)?;
        return Ok(());
    }

    let labels: Vec<String> = summary.rows.iter().map(|row| row.label()).collect();
    let width = labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max("SALE".len());

    writeln!(
        out,
        "{:<width$}  {:>12}  {:>12}  {:>12}",
        "SALE", "REVENUE", "COST", "PROFIT"
    )?;
    for (row, label) in summary.rows.iter().zip(&labels) {
        writeln!(
            out,
            "{:<width$}  {:>12}  {:>12}  {:>12}",
            label,
            currency(row.revenue),
            currency(row.total_cost),
            currency(row.profit)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Profit for {}: {}", date, currency(summary.total_profit))?;

    if summary.excluded_sales > 0 {
        writeln!(
            out,
            "({} sale(s) of unregistered products not counted)",
            summary.excluded_sales
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{db, text};
    use tally_core::Money;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_empty_day() {
        let db = db().await;
        let mut out = Vec::new();

        show(&db, day(), false, &mut out).await.unwrap();

        assert_eq!(text(out), "No sales on 2024-01-01\n");
    }

    #[tokio::test]
    async fn test_profit_banner() {
        let db = db().await;
        db.products()
            .upsert_product("Widget", Money::from_cents(500))
            .await
            .unwrap();
        let sale = db
            .sales()
            .insert_sale(day(), "Widget", 3, Money::from_cents(1000))
            .await
            .unwrap();

        let mut out = Vec::new();
        show(&db, day(), false, &mut out).await.unwrap();
        let report = text(out);

        assert!(report.contains(&format!("ID {} - Widget - 3 pcs - 10.00", sale.id)));
        assert!(report.ends_with("Profit for 2024-01-01: $15.00\n"));
    }

    #[tokio::test]
    async fn test_excluded_sales_are_mentioned() {
        let db = db().await;
        db.products()
            .upsert_product("Widget", Money::from_cents(500))
            .await
            .unwrap();
        db.sales()
            .insert_sale(day(), "Gizmo", 1, Money::from_cents(1000))
            .await
            .unwrap();

        let mut out = Vec::new();
        show(&db, day(), false, &mut out).await.unwrap();
        let report = text(out);

        assert!(report.contains("Profit for 2024-01-01: $0.00"));
        assert!(report.contains("1 sale(s) of unregistered products not counted"));
    }

    #[tokio::test]
    async fn test_json() {
        let db = db().await;
        db.products()
            .upsert_product("Widget", Money::from_cents(500))
            .await
            .unwrap();
        db.sales()
            .insert_sale(day(), "Widget", 3, Money::from_cents(1000))
            .await
            .unwrap();

        let mut out = Vec::new();
        show(&db, day(), true, &mut out).await.unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["date"], "2024-01-01");
        assert_eq!(value["total_profit"], 1500);
        assert_eq!(value["rows"][0]["revenue"], 3000);
    }
}
