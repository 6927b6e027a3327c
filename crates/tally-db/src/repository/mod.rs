//! # Repository Module
//!
//! Database repository implementations for Tally.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CLI command                                                            │
//! │       │                                                                 │
//! │       │  db.sales().list_sales_for_date(date)                           │
//! │       ▼                                                                 │
//! │  ProductRepository                 SaleRepository                      │
//! │  ├── upsert_product(name, cost)    ├── insert_sale(date, ...)          │
//! │  ├── list_products()               ├── delete_sale(id)                 │
//! │  └── get_product(name)             └── list_sales_for_date(date)       │
//! │       │                                                                 │
//! │       │  Parameterised SQL (values are always bound, never formatted)   │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product upsert and listing
//! - [`sale::SaleRepository`] - Sale insert, delete and daily listing

pub mod product;
pub mod sale;
