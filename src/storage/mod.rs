//! Storage layer for TiffinCLI
//!
//! State is persisted through a small key-value port with three independent
//! slices: the record list, the price config, and the advance amount. The
//! file backend keeps one file per key with atomic writes; the in-memory
//! backend serves tests and dry runs.

pub mod file_io;
pub mod file_store;
pub mod memory;

pub use file_io::{read_optional, write_atomic};
pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::error::TiffinResult;

/// Key of the JSON array of meal records
pub const RECORDS_KEY: &str = "records";

/// Key of the JSON price config object
pub const PRICES_KEY: &str = "prices";

/// Key of the stringified advance amount
pub const ADVANCE_KEY: &str = "advance";

/// Durable get/set-by-key storage
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if never written
    fn get(&self, key: &str) -> TiffinResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> TiffinResult<()>;
}
