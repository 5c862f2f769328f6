//! Audit logging system for TiffinCLI
//!
//! Records every store mutation (meal records added or deleted, prices and
//! advance changed) with before/after values in an append-only audit log.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information, and optional before/after values.
//! - `AuditLogger`: writes entries to the log file as JSON lines.
//! - `generate_diff`: human-readable diff between two entity states.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
