//! Service layer for TiffinCLI
//!
//! The service layer holds the business rules on top of the storage port:
//! validation, price snapshots, ordering, and audit logging.

pub mod record_store;

pub use record_store::{RecordStore, StoreState};
