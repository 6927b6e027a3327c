//! # Domain Types
//!
//! Core domain records used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐            ┌─────────────────────┐                │
//! │  │    Product      │            │        Sale         │                │
//! │  │  ─────────────  │   name     │  ─────────────────  │                │
//! │  │  name (key)     │◄ ─ ─ ─ ─ ─ │  id (autoincrement) │                │
//! │  │  cost           │  (no FK)   │  date               │                │
//! │  │  updated_at     │            │  product            │                │
//! │  └─────────────────┘            │  quantity           │                │
//! │                                 │  sale_price         │                │
//! │                                 │  created_at         │                │
//! │                                 └─────────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name-Keyed Identity
//! A product is identified by its trimmed name. Sales carry the product name
//! as plain text, so cost lookups happen at report time and a cost change
//! applies to every past sale of that product.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product the business makes and sells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Unique, trimmed, non-empty name.
    pub name: String,

    /// Production cost per unit.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "cost_cents"))]
    pub cost: Money,

    /// When the product was last saved.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Sale
// =============================================================================

/// One recorded sale line: `quantity` units of `product` at `sale_price` each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Sale {
    /// Surrogate key, assigned by the store, never reused.
    pub id: i64,

    /// Calendar day the sale belongs to.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "sale_date"))]
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Product name at the time of sale.
    pub product: String,

    /// Units sold (always > 0).
    pub quantity: i64,

    /// Price per unit.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "sale_price_cents"))]
    pub sale_price: Money,

    /// When the sale was recorded.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Sale {
    /// Returns `quantity × sale_price`, `None` if it overflows.
    #[inline]
    pub fn revenue(&self) -> Option<Money> {
        self.sale_price.checked_multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_revenue() {
        let sale = Sale {
            id: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            product: "Widget".to_string(),
            quantity: 3,
            sale_price: Money::from_cents(1000),
            created_at: Utc::now(),
        };

        assert_eq!(sale.revenue(), Some(Money::from_cents(3000)));

        let huge = Sale {
            quantity: i64::MAX,
            ..sale
        };
        assert_eq!(huge.revenue(), None);
    }

    #[test]
    fn test_sale_serializes_date_as_iso() {
        let sale = Sale {
            id: 7,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            product: "Widget".to_string(),
            quantity: 1,
            sale_price: Money::from_cents(250),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["sale_price"], 250);
    }
}
