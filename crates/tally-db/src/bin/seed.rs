//! # Seed Data Generator
//!
//! Populates a database with demo products and one day of sales.
//!
//! ## Usage
//! ```bash
//! # Seed ./tally_dev.db with today's sales
//! cargo run -p tally-db --bin seed
//!
//! # Specify database path and sale date
//! cargo run -p tally-db --bin seed -- --db ./data/tally.db --date 2024-01-01
//! ```
//!
//! One sale references a product that is never registered, so the
//! printed summary shows an excluded sale.

use chrono::{Local, NaiveDate};
use std::env;
use tally_core::Money;
use tally_db::{Database, DbConfig};

/// Demo products: (name, cost in cents)
const PRODUCTS: &[(&str, i64)] = &[
    ("Widget", 500),
    ("Gadget", 250),
    ("Sprocket", 120),
    ("Gizmo Deluxe", 1875),
    ("Cable 2m", 90),
];

/// Demo sales: (product, quantity, price in cents)
const SALES: &[(&str, i64, i64)] = &[
    ("Widget", 3, 1000),
    ("Gadget", 10, 400),
    ("Sprocket", 25, 150),
    ("Gizmo Deluxe", 1, 1500),
    ("Cable 2m", 4, 300),
    ("Mystery Box", 2, 999),
    ("Widget", 2, 1200),
];

/// Inserts `sales` on `date` and returns how many were stored. Rejected
/// rows are reported on stderr and skipped.
async fn record_sales(db: &Database, date: NaiveDate, sales: &[(&str, i64, i64)]) -> usize {
    let mut recorded = 0;
    for (product, quantity, price_cents) in sales {
        if let Err(e) = db
            .sales()
            .insert_sale(date, product, *quantity, Money::from_cents(*price_cents))
            .await
        {
            eprintln!("Failed to record sale of {}: {}", product, e);
            continue;
        }

        recorded += 1;
    }
    recorded
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./tally_dev.db");
    let mut date = Local::now().date_naive();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--date" => {
                if i + 1 < args.len() {
                    date = NaiveDate::parse_from_str(&args[i + 1], "%Y-%m-%d")?;
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Tally Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>      Database file path (default: ./tally_dev.db)");
                println!("      --date <DATE>    Day to record sales on, YYYY-MM-DD (default: today)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Tally Seed Data Generator");
    println!("============================");
    println!("Database: {}", db_path);
    println!("Date:     {}", date);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Schema ready");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Registering products...");
    for (name, cost_cents) in PRODUCTS {
        db.products()
            .upsert_product(name, Money::from_cents(*cost_cents))
            .await?;
    }
    println!("✓ {} products", PRODUCTS.len());

    println!("Recording sales...");
    let recorded = record_sales(&db, date, SALES).await;
    println!("✓ {} of {} sales", recorded, SALES.len());

    let summary = db.summaries().daily_summary(date).await?;
    println!();
    println!("Profit for {}: {}", date, summary.total_profit);
    println!("  Revenue: {}", summary.total_revenue);
    println!("  Cost:    {}", summary.total_cost);
    println!("  Excluded sales (unknown product): {}", summary.excluded_sales);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
