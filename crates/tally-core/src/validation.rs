//! # Validation Module
//!
//! Input validation for every write Tally performs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI (clap)                                                   │
//! │  ├── Type parsing (integers, dates)                                    │
//! │  └── Money text → Money::parse                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Repository (tally-db)                                        │
//! │  └── THIS MODULE: rules checked before any SQL runs                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / UNIQUE constraints                                     │
//! │  └── CHECK (cost_cents >= 0), CHECK (quantity > 0), ...                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{normalize_product_name, validate_quantity};
//!
//! assert_eq!(normalize_product_name("  Widget ").unwrap(), "Widget");
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// String Validators
// =============================================================================

/// Trims a product name and rejects it if nothing is left.
///
/// ## Returns
/// The trimmed name, which is the product's identity in the store.
///
/// ## Example
/// ```rust
/// use tally_core::validation::normalize_product_name;
///
/// assert_eq!(normalize_product_name("Widget").unwrap(), "Widget");
/// assert!(normalize_product_name("   ").is_err());
/// ```
pub fn normalize_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product's production cost.
///
/// Zero is allowed (free inputs); negative is not.
pub fn validate_cost(cost: Money) -> ValidationResult<()> {
    if cost.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "cost".to_string(),
        });
    }

    Ok(())
}

/// Validates a sale quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_quantity;
///
/// assert!(validate_quantity(3).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-1).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a per-unit sale price.
///
/// Zero is allowed (giveaways); negative is not.
pub fn validate_sale_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "sale_price".to_string(),
        });
    }

    Ok(())
}

/// Validates that a sale's revenue (`quantity × sale_price`) fits in i64 cents.
///
/// ## Example
/// ```rust
/// use tally_core::money::Money;
/// use tally_core::validation::validate_sale_amount;
///
/// assert!(validate_sale_amount(3, Money::from_cents(1000)).is_ok());
/// assert!(validate_sale_amount(i64::MAX, Money::from_cents(2)).is_err());
/// ```
pub fn validate_sale_amount(qty: i64, price: Money) -> ValidationResult<()> {
    if price.checked_multiply_quantity(qty).is_none() {
        return Err(ValidationError::TooLarge {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_product_name() {
        assert_eq!(normalize_product_name("Widget").unwrap(), "Widget");
        assert_eq!(normalize_product_name("  Café con leche \t").unwrap(), "Café con leche");

        let err = normalize_product_name("").unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "name".to_string() });
        assert!(normalize_product_name(" \n ").is_err());
    }

    #[test]
    fn test_validate_cost() {
        assert!(validate_cost(Money::zero()).is_ok());
        assert!(validate_cost(Money::from_cents(500)).is_ok());

        let err = validate_cost(Money::from_cents(-1)).unwrap_err();
        assert_eq!(err.field(), "cost");
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(10_000).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(i64::MIN).is_err());
    }

    #[test]
    fn test_validate_sale_price() {
        assert!(validate_sale_price(Money::zero()).is_ok());
        assert!(validate_sale_price(Money::from_cents(1099)).is_ok());

        let err = validate_sale_price(Money::from_cents(-100)).unwrap_err();
        assert!(matches!(err, ValidationError::MustNotBeNegative { .. }));
        assert_eq!(err.field(), "sale_price");
    }

    #[test]
    fn test_validate_sale_amount() {
        assert!(validate_sale_amount(1, Money::from_cents(i64::MAX)).is_ok());
        assert!(validate_sale_amount(10_000, Money::from_cents(1099)).is_ok());

        let err = validate_sale_amount(10_000_000_000, Money::from_cents(1_000_000_000_000))
            .unwrap_err();
        assert_eq!(err, ValidationError::TooLarge { field: "quantity".to_string() });
    }
}
