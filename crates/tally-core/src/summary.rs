//! # Daily Summary
//!
//! Revenue, cost and profit for one calendar day.
//!
//! ## How a Summary Is Built
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  sales on 2024-01-01 (id desc)       products (current costs)          │
//! │  ┌──────────────────────────┐        ┌──────────────────────┐          │
//! │  │ #2 Widget  x2 @ 12.00    │        │ Widget     5.00      │          │
//! │  │ #1 Widget  x3 @ 10.00    │        │ Gadget     2.50      │          │
//! │  │ #0 Gizmo   x1 @  4.00    │        └──────────────────────┘          │
//! │  └──────────────────────────┘                  │                        │
//! │              │      inner join on exact name   │                        │
//! │              └────────────────┬────────────────┘                        │
//! │                               ▼                                         │
//! │  #2 Widget revenue 24.00 cost 10.00 profit 14.00                       │
//! │  #1 Widget revenue 30.00 cost 15.00 profit 15.00                       │
//! │  (#0 Gizmo has no product row: dropped)                                 │
//! │                                                                         │
//! │  total_profit = 29.00                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Costs are looked up at report time, so editing a product's cost rewrites
//! the profit of every past day it was sold on.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::SummaryError;
use crate::money::Money;
use crate::types::{Product, Sale};

// =============================================================================
// Summary Row
// =============================================================================

/// One sale joined with its product's current cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryRow {
    pub sale_id: i64,
    pub product: String,
    pub quantity: i64,
    pub sale_price: Money,
    /// Current production cost of one unit.
    pub unit_cost: Money,
    /// `quantity × sale_price`
    pub revenue: Money,
    /// `quantity × unit_cost`
    pub total_cost: Money,
    /// `revenue - total_cost`, negative when sold below cost.
    pub profit: Money,
}

impl SummaryRow {
    /// Builds a row from a sale and the matched product cost.
    ///
    /// Fails with `SummaryError::RowOverflow` when revenue, cost or profit
    /// does not fit in i64 cents.
    pub fn new(sale: &Sale, unit_cost: Money) -> Result<Self, SummaryError> {
        let overflow = || SummaryError::RowOverflow { sale_id: sale.id };

        let revenue = sale.revenue().ok_or_else(overflow)?;
        let total_cost = unit_cost
            .checked_multiply_quantity(sale.quantity)
            .ok_or_else(overflow)?;
        let profit = revenue.checked_sub(total_cost).ok_or_else(overflow)?;

        Ok(SummaryRow {
            sale_id: sale.id,
            product: sale.product.clone(),
            quantity: sale.quantity,
            sale_price: sale.sale_price,
            unit_cost,
            revenue,
            total_cost,
            profit,
        })
    }

    /// Short human label used when picking a row to delete.
    ///
    /// ## Example
    /// `ID 12 - Widget - 3 pcs - 10.00`
    pub fn label(&self) -> String {
        format!(
            "ID {} - {} - {} pcs - {}",
            self.sale_id, self.product, self.quantity, self.sale_price
        )
    }
}

// =============================================================================
// Daily Summary
// =============================================================================

/// All matched sales of one day plus their totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailySummary {
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Rows ordered by sale id, most recent first.
    pub rows: Vec<SummaryRow>,

    pub total_revenue: Money,
    pub total_cost: Money,
    pub total_profit: Money,

    /// Sales on this date whose product name matched no product.
    /// They are not part of `rows` or any total.
    pub excluded_sales: usize,
}

impl DailySummary {
    /// Summary for a day with no sales.
    pub fn empty(date: NaiveDate) -> Self {
        DailySummary {
            date,
            rows: Vec::new(),
            total_revenue: Money::zero(),
            total_cost: Money::zero(),
            total_profit: Money::zero(),
            excluded_sales: 0,
        }
    }

    /// True when no sale contributed to the summary.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Joins a day's sales with the current product list and totals them.
///
/// ## Arguments
/// * `date` - The day being summarized
/// * `sales` - Sales recorded on `date`
/// * `products` - The current product list
///
/// ## Join Rules
/// - Exact, case-sensitive match of `sale.product` against `product.name`
/// - Sales with no matching product are skipped and counted in
///   `excluded_sales`
/// - Rows are returned by sale id descending regardless of input order
///
/// ## Errors
/// `SummaryError` when a row or a day total leaves the i64 cents range.
pub fn build_daily_summary(
    date: NaiveDate,
    sales: &[Sale],
    products: &[Product],
) -> Result<DailySummary, SummaryError> {
    let costs: HashMap<&str, Money> = products
        .iter()
        .map(|p| (p.name.as_str(), p.cost))
        .collect();

    let mut summary = DailySummary::empty(date);

    for sale in sales {
        match costs.get(sale.product.as_str()) {
            Some(&unit_cost) => summary.rows.push(SummaryRow::new(sale, unit_cost)?),
            None => summary.excluded_sales += 1,
        }
    }

    summary.rows.sort_by(|a, b| b.sale_id.cmp(&a.sale_id));

    let rows = &summary.rows;
    let total_revenue = checked_total(date, "total_revenue", rows.iter().map(|r| r.revenue))?;
    let total_cost = checked_total(date, "total_cost", rows.iter().map(|r| r.total_cost))?;
    let total_profit = checked_total(date, "total_profit", rows.iter().map(|r| r.profit))?;

    summary.total_revenue = total_revenue;
    summary.total_cost = total_cost;
    summary.total_profit = total_profit;

    Ok(summary)
}

fn checked_total(
    date: NaiveDate,
    total: &'static str,
    mut amounts: impl Iterator<Item = Money>,
) -> Result<Money, SummaryError> {
    amounts
        .try_fold(Money::zero(), |acc, amount| acc.checked_add(amount))
        .ok_or(SummaryError::TotalOverflow { total, date })
}

// =============================================================================
// Unit Tests
// =============================================================================
