//! CLI argument definitions and parsing structures.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tally_core::Money;

/// Parses a product cost such as `5`, `5.5` or `5.50`.
fn parse_cost(text: &str) -> Result<Money, tally_core::ValidationError> {
    Money::parse(text, "cost")
}

/// Parses a per-unit sale price.
fn parse_sale_price(text: &str) -> Result<Money, tally_core::ValidationError> {
    Money::parse(text, "sale_price")
}

#[derive(Debug, Parser)]
#[clap(name = "tally", version, about = "Track products, sales and daily profit")]
pub struct Cli {
    /// Database file (or set `TALLY_DB_PATH`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// Log debug messages to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register products and their production cost.
    Product {
        #[clap(subcommand)]
        cmd: ProductCmd,
    },

    /// Record, list and delete sales.
    Sale {
        #[clap(subcommand)]
        cmd: SaleCmd,
    },

    /// Revenue, cost and profit for one day.
    Summary {
        /// Day to summarize, YYYY-MM-DD (default: today).
        #[clap(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProductCmd {
    /// Create a product or replace its cost.
    Save {
        /// Product name; surrounding whitespace is ignored.
        name: String,

        /// Production cost per unit (e.g. 5.00).
        #[clap(value_parser = parse_cost, allow_hyphen_values = true)]
        cost: Money,
    },

    /// List products by name.
    List,
}

#[derive(Debug, Subcommand)]
pub enum SaleCmd {
    /// Record a sale.
    Add {
        /// Product name, matched exactly against registered products.
        product: String,

        /// Units sold.
        #[clap(allow_hyphen_values = true)]
        quantity: i64,

        /// Price per unit (e.g. 10.00).
        #[clap(value_parser = parse_sale_price, allow_hyphen_values = true)]
        price: Money,

        /// Day of the sale, YYYY-MM-DD (default: today).
        #[clap(long)]
        date: Option<NaiveDate>,
    },

    /// List the sales of one day, newest first.
    List {
        /// Day to list, YYYY-MM-DD (default: today).
        #[clap(long)]
        date: Option<NaiveDate>,
    },

    /// Delete a sale by id.
    Delete {
        /// Sale id as shown by `sale list` or `summary`.
        id: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sale_add() {
        let cli = Cli::try_parse_from([
            "tally", "sale", "add", "Widget", "3", "10.00", "--date", "2024-01-01",
        ])
        .unwrap();

        match cli.command {
            Commands::Sale {
                cmd:
                    SaleCmd::Add {
                        product,
                        quantity,
                        price,
                        date,
                    },
            } => {
                assert_eq!(product, "Widget");
                assert_eq!(quantity, 3);
                assert_eq!(price, Money::from_cents(1000));
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["tally", "product", "list", "--json", "--db", "x.db"]).unwrap();

        assert!(cli.json);
        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = Cli::try_parse_from(["tally", "product", "save", "Widget", "-1"]).unwrap();

        match cli.command {
            Commands::Product {
                cmd: ProductCmd::Save { cost, .. },
            } => assert!(cost.is_negative()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_money_is_rejected() {
        assert!(Cli::try_parse_from(["tally", "product", "save", "Widget", "5.999"]).is_err());
        assert!(Cli::try_parse_from(["tally", "sale", "add", "Widget", "1", "abc"]).is_err());
    }

    #[test]
    fn test_bad_date_is_rejected() {
        assert!(Cli::try_parse_from(["tally", "summary", "--date", "2024-13-01"]).is_err());
    }
}
