//! Meal record CLI commands
//!
//! Implements add, delete, list, and summary.

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::{format_month_groups, format_record_line, format_summary, format_total_line};
use crate::error::{TiffinError, TiffinResult};
use crate::models::{MealSelection, MonthKey, RecordId};
use crate::reports::{group_by_month, total_cost};
use crate::services::RecordStore;
use crate::storage::KeyValueStore;

/// Arguments for `tiffin add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Meal date (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Add a morning meal
    #[arg(short, long)]
    pub morning: bool,

    /// Add an evening meal
    #[arg(short, long)]
    pub evening: bool,
}

/// Arguments for `tiffin delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record ID or unique ID prefix (as shown by `tiffin list`)
    pub id: String,
}

/// Arguments for `tiffin list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show one month (YYYY-MM)
    #[arg(long)]
    pub month: Option<String>,
}

/// Parse a meal date using the configured format, falling back to ISO
pub fn parse_date(input: &str, settings: &Settings) -> TiffinResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, &settings.date_format)
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y-%m-%d"))
        .map_err(|_| {
            TiffinError::Validation(format!(
                "Invalid date '{}'. Use format {} (e.g. 2024-06-01)",
                input, settings.date_format
            ))
        })
}

/// Handle `tiffin add`
pub fn handle_add<S: KeyValueStore>(
    store: &mut RecordStore<S>,
    settings: &Settings,
    args: AddArgs,
) -> TiffinResult<()> {
    let date = match args.date.as_deref() {
        Some(raw) => parse_date(raw, settings)?,
        None => chrono::Local::now().date_naive(),
    };

    let created = store.add_record(date, MealSelection::new(args.morning, args.evening))?;

    for record in &created {
        println!(
            "Added: {}",
            format_record_line(record, &settings.currency_symbol)
        );
    }

    let summary = store.summary();
    println!(
        "Balance: {}",
        summary.balance.format_with_symbol(&settings.currency_symbol)
    );

    Ok(())
}

/// Handle `tiffin delete`
pub fn handle_delete<S: KeyValueStore>(
    store: &mut RecordStore<S>,
    settings: &Settings,
    args: DeleteArgs,
) -> TiffinResult<()> {
    let id: RecordId = store
        .find_record(&args.id)?
        .map(|r| r.id.clone())
        .ok_or_else(|| TiffinError::record_not_found(&args.id))?;

    if let Some(removed) = store.delete_record(&id)? {
        println!(
            "Deleted: {}",
            format_record_line(&removed, &settings.currency_symbol)
        );
    }

    Ok(())
}

/// Handle `tiffin list`
pub fn handle_list<S: KeyValueStore>(
    store: &RecordStore<S>,
    settings: &Settings,
    args: ListArgs,
) -> TiffinResult<()> {
    let month = args
        .month
        .as_deref()
        .map(|m| {
            m.parse::<MonthKey>()
                .map_err(|e| TiffinError::Validation(e.to_string()))
        })
        .transpose()?;

    let records: Vec<_> = match month {
        Some(month) => store
            .records()
            .iter()
            .filter(|r| month.contains(r.date))
            .cloned()
            .collect(),
        None => store.records().to_vec(),
    };

    let groups = group_by_month(&records);
    print!("{}", format_month_groups(&groups, &settings.currency_symbol));

    if groups.len() > 1 {
        println!();
        print!(
            "{}",
            format_total_line(total_cost(&records), records.len(), &settings.currency_symbol)
        );
    }

    Ok(())
}

/// Handle `tiffin summary`
pub fn handle_summary<S: KeyValueStore>(
    store: &RecordStore<S>,
    settings: &Settings,
) -> TiffinResult<()> {
    print!(
        "{}",
        format_summary(&store.summary(), &settings.currency_symbol)
    );
    Ok(())
}
