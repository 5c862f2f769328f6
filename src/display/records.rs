//! Meal record display formatting
//!
//! Formats records for terminal output, one table per month.

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{MealRecord, Money};
use crate::reports::MonthGroup;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Meal")]
    meal: String,
    #[tabled(rename = "Price")]
    price: String,
}

/// Short day label, e.g. "Sat, Jun 1"
pub fn format_day(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// One-line description of a record
pub fn format_record_line(record: &MealRecord, currency_symbol: &str) -> String {
    format!(
        "{}  {} ({})  {}",
        record.id.short(),
        format_day(record.date),
        record.meal_type,
        record.price.format_with_symbol(currency_symbol)
    )
}

/// Table of records, one row each
pub fn format_record_table(records: &[MealRecord], currency_symbol: &str) -> String {
    let rows = records.iter().map(|r| RecordRow {
        id: r.id.short().to_string(),
        date: format_day(r.date),
        meal: r.meal_type.to_string(),
        price: r.price.format_with_symbol(currency_symbol),
    });

    Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()))
        .to_string()
}

/// Month sections, newest first, each with its total
pub fn format_month_groups(groups: &[MonthGroup], currency_symbol: &str) -> String {
    if groups.is_empty() {
        return "No meals recorded yet.\n".to_string();
    }

    let mut output = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "{}  ({} meals, {})\n",
            group.month.label(),
            group.records.len(),
            group.total().format_with_symbol(currency_symbol)
        ));
        output.push_str(&format_record_table(&group.records, currency_symbol));
        output.push('\n');
    }

    output
}

/// Grand total line shown under a listing
pub fn format_total_line(total: Money, meal_count: usize, currency_symbol: &str) -> String {
    format!(
        "Total: {} meals, {}\n",
        meal_count,
        total.format_with_symbol(currency_symbol)
    )
}
