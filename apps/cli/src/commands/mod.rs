//! # Commands Module
//!
//! One handler per subcommand. Every handler receives the open database,
//! runs a single operation and writes its result to `out`.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (shared output helpers)
//! ├── product.rs  ◄─── product save / list
//! ├── sale.rs     ◄─── sale add / list / delete
//! └── summary.rs  ◄─── daily profit summary
//! ```
//!
//! Handlers never print directly: text and JSON go to the writer they are
//! given, so tests capture output in a `Vec<u8>`.

pub mod product;
pub mod sale;
pub mod summary;

use std::io::Write;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tally_core::Money;

use crate::error::CliError;

/// Renders money for the terminal: `$10.00`, `-$2.50`.
pub fn currency(amount: Money) -> String {
    if amount.is_negative() {
        format!("-${}", amount.to_string().trim_start_matches('-'))
    } else {
        format!("${}", amount)
    }
}

/// The requested day, or today in local time.
pub fn day_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(currency(Money::from_cents(1000)), "$10.00");
        assert_eq!(currency(Money::zero()), "$0.00");
        assert_eq!(currency(Money::from_cents(-250)), "-$2.50");
        assert_eq!(currency(Money::from_cents(i64::MIN)), "-$92233720368547758.08");
    }

    #[test]
    fn test_explicit_day_is_kept() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(day_or_today(Some(day)), day);
    }
}
