//! # tally-core: Pure Business Logic for Tally
//!
//! This crate holds everything in Tally that can be computed without touching
//! a database: the money type, the domain records, input validation and the
//! daily profit aggregation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Presentation (apps/cli, `tally`)                 │   │
//! │  │   product save/list • sale add/list/delete • summary            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   tally-db (Database Layer)                     │   │
//! │  │          schema, ProductRepository, SaleRepository              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  summary  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ DailySumm │  │   rules   │  │   │
//! │  │   │   Sale    │  │           │  │ SummaryRow│  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Product, Sale)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation and summary error types
//! - [`validation`] - Input rules applied before any write
//! - [`summary`] - Daily revenue / cost / profit aggregation
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::money::Money;
//!
//! let price: Money = "10.00".parse().unwrap();
//! let revenue = price.checked_multiply_quantity(3);
//! assert_eq!(revenue, Some(Money::from_cents(3000)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{SummaryError, ValidationError, ValidationResult};
pub use money::Money;
pub use summary::{build_daily_summary, DailySummary, SummaryRow};
pub use types::*;
