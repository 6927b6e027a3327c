//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A day of sales summed as floats drifts away from the till.             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "10.00" is parsed once into 1000 cents, every sum after that         │
//! │    is exact integer arithmetic.                                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // 10.99
//!
//! // Or parse decimal text typed by a user
//! let cost: Money = "5.50".parse().unwrap();
//!
//! // Arithmetic is checked: `None` means the result left the i64 range
//! let margin = price.checked_sub(cost).unwrap();
//! assert_eq!(margin.cents(), 549);
//! assert!(Money::from_cents(i64::MAX).checked_add(price).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: profit can be negative when selling below cost
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Stored as INTEGER**: `sqlx(transparent)` maps it to an i64 column
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Product.cost ───────────┐                                              │
/// │                          ├──► SummaryRow { revenue, total_cost,        │
/// │  Sale.sale_price × qty ──┘                profit }                      │
/// │                                   │                                     │
/// │                                   ▼                                     │
/// │                         DailySummary.total_profit                       │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses decimal text such as `"10"`, `"10.5"` or `"10.50"`.
    ///
    /// `field` names the input in the returned error so the caller can tell
    /// the user which value was malformed.
    ///
    /// ## Rules
    /// - Optional leading `-`
    /// - Digits, optionally followed by `.` and at most two digits
    /// - Surrounding whitespace is ignored
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::parse("10.5", "price").unwrap().cents(), 1050);
    /// assert!(Money::parse("10.505", "price").is_err());
    /// assert!(Money::parse("ten", "price").is_err());
    /// ```
    pub fn parse(text: &str, field: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: reason.to_string(),
        };

        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (major, minor) = digits.split_once('.').unwrap_or((digits, ""));

        if major.is_empty() && minor.is_empty() {
            return Err(invalid("expected a decimal amount"));
        }

        if !major.chars().all(|c| c.is_ascii_digit()) || !minor.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("expected a decimal amount"));
        }

        if minor.len() > 2 {
            return Err(invalid("at most two decimal places are allowed"));
        }

        let major: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| invalid("amount is too large"))?
        };

        // "5" after the point means 50 cents, not 5
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| invalid("expected a decimal amount"))? * 10,
            _ => minor.parse().map_err(|_| invalid("expected a decimal amount"))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).major(), 10);
    /// assert_eq!(Money::from_cents(-550).major(), -5);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a per-unit amount by a quantity.
    ///
    /// ## Returns
    /// `None` when the product does not fit in i64 cents.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1000); // 10.00
    /// let revenue = unit_price.checked_multiply_quantity(3).unwrap();
    /// assert_eq!(revenue.cents(), 3000); // 30.00
    ///
    /// assert!(unit_price.checked_multiply_quantity(i64::MAX).is_none());
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Subtracts `other`, `None` on overflow.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering (`"10.99"`, `"-5.50"`).
///
/// ## Note
/// No currency symbol: the presentation layer decides how to show currency.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s, "amount")
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_parse_accepts_decimal_text() {
        assert_eq!(Money::parse("10", "cost").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5", "cost").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.05", "cost").unwrap().cents(), 1005);
        assert_eq!(Money::parse(" 0.99 ", "cost").unwrap().cents(), 99);
        assert_eq!(Money::parse(".5", "cost").unwrap().cents(), 50);
        assert_eq!(Money::parse("7.", "cost").unwrap().cents(), 700);
        assert_eq!(Money::parse("-3.25", "cost").unwrap().cents(), -325);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for bad in ["", "-", ".", "abc", "1.2.3", "1,50", "10.505", "+5", "1e3"] {
            let err = Money::parse(bad, "price").unwrap_err();
            assert_eq!(err.field(), "price", "input {bad:?}");
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(Money::parse("99999999999999999999", "cost").is_err());
        assert!(Money::parse("92233720368547758.08", "cost").is_err());
    }

    #[test]
    fn test_from_str_uses_generic_field() {
        let err = "x".parse::<Money>().unwrap_err();
        assert_eq!(err.field(), "amount");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(1500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(2500)));
        assert_eq!(a.checked_sub(b), Some(Money::from_cents(-500)));
        assert_eq!(a.checked_multiply_quantity(3), Some(Money::from_cents(3000)));
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let max = Money::from_cents(i64::MAX);
        let min = Money::from_cents(i64::MIN);

        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(min.checked_sub(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_cents(1_000_000_000_000).checked_multiply_quantity(10_000_000_000),
            None
        );
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(1099)).unwrap();
        assert_eq!(json, "1099");
    }
}
