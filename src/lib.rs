//! TiffinCLI - track tiffin meals against an advance payment
//!
//! This library provides the core functionality for the TiffinCLI meal
//! tracker. Each meal record is priced at the rate in effect when it was
//! added, and the balance is the advance paid minus the cost of all meals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, prices, money, months)
//! - `storage`: Key-value persistence port and its file/memory backends
//! - `services`: The record store
//! - `reports`: Totals, balance, and monthly grouping
//! - `export`: CSV and JSON export
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tiffin::services::RecordStore;
//! use tiffin::storage::MemoryStore;
//!
//! let mut store = RecordStore::initialize(MemoryStore::new());
//! store.set_prices("50", "60")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::TiffinError;
