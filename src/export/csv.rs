//! CSV export of meal records
//!
//! The header comes from a fixed schema, so an empty record list still
//! produces a valid file with just the header row.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{TiffinError, TiffinResult};
use crate::models::MealRecord;

/// Column names of the export, in order
pub const CSV_HEADER: [&str; 3] = ["Date", "Meal", "Price"];

/// Name of the export file for a given day
pub fn export_file_name(today: NaiveDate) -> String {
    format!("tiffin-records-{}.csv", today.format("%Y-%m-%d"))
}

/// Write records as CSV (`Date,Meal,Price`), one row per record in list order
///
/// Prices carry the currency symbol (`₹50`, `₹52.5`).
pub fn export_csv<W: Write>(
    records: &[MealRecord],
    currency_symbol: &str,
    writer: W,
) -> TiffinResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for record in records {
        let date = record.date.format("%Y-%m-%d").to_string();
        let price = record.price.format_compact(currency_symbol);
        csv_writer.write_record([date.as_str(), record.meal_type.label(), price.as_str()])?;
    }

    csv_writer
        .flush()
        .map_err(|e| TiffinError::Export(e.to_string()))?;

    Ok(())
}
