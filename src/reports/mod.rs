//! Derived figures for TiffinCLI
//!
//! Pure aggregation over the record list:
//! - Summary: total cost, remaining advance balance, meal counts
//! - Monthly: records grouped by calendar month with month totals

pub mod monthly;
pub mod summary;

pub use monthly::{group_by_month, month_total, MonthGroup};
pub use summary::{remaining_balance, total_cost, Summary};
