//! Export module for TiffinCLI
//!
//! - CSV: meal records with a fixed `Date,Meal,Price` schema
//! - JSON: full store snapshot for backups

pub mod csv;
pub mod json;

pub use self::csv::{export_csv, export_file_name, CSV_HEADER};
pub use self::json::{export_json, FullExport, EXPORT_SCHEMA_VERSION};
