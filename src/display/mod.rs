//! Display formatting for terminal output

pub mod records;
pub mod summary;

pub use records::{
    format_day, format_month_groups, format_record_line, format_record_table, format_total_line,
};
pub use summary::{format_prices, format_summary};
