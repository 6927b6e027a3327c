//! # Product Commands
//!
//! `tally product save` and `tally product list`.

use std::io::Write;

use tally_core::Money;
use tally_db::Database;
use tracing::info;

use super::{currency, write_json};
use crate::error::CliError;

/// Creates a product or replaces its cost.
pub async fn save<W: Write>(
    db: &Database,
    name: &str,
    cost: Money,
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let product = db.products().upsert_product(name, cost).await?;

    info!(name = %product.name, cost = %product.cost, "Product saved");

    if json {
        return write_json(out, &product);
    }

    writeln!(out, "Saved {} (cost {})", product.name, currency(product.cost))?;
    Ok(())
}

/// Lists products ordered by name.
pub async fn list<W: Write>(db: &Database, json: bool, out: &mut W) -> Result<(), CliError> {
    let products = db.products().list_products().await?;

    if json {
        return write_json(out, &products);
    }

    if products.is_empty() {
        writeln!(out, "No products yet")?;
        return Ok(());
    }

    let width = products
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    writeln!(out, "{:<width$}  {:>12}", "NAME", "COST")?;
    for product in &products {
        writeln!(out, "{:<width$}  {:>12}", product.name, currency(product.cost))?;
    }

    Ok(())
}
