//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the record store.

pub mod audit;
pub mod export;
pub mod prices;
pub mod record;

pub use audit::{handle_audit, AuditArgs};
pub use export::{handle_export, ExportArgs, ExportFormat};
pub use prices::{handle_advance_command, handle_prices_command, AdvanceCommands, PricesCommands};
pub use record::{handle_add, handle_delete, handle_list, handle_summary, AddArgs, DeleteArgs, ListArgs};
