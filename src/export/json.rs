//! JSON export functionality
//!
//! Exports the complete store state to JSON with schema versioning, for
//! backups and machine processing.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TiffinError, TiffinResult};
use crate::models::{MealRecord, Money, PriceConfig};
use crate::reports::Summary;
use crate::services::RecordStore;
use crate::storage::KeyValueStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full store export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// `None` if prices were never configured
    pub prices: Option<PriceConfig>,

    pub advance: Money,

    /// Records, newest date first
    pub records: Vec<MealRecord>,

    pub metadata: ExportMetadata,
}

/// Derived figures included for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub meal_count: usize,
    pub total_cost: Money,
    pub balance: Money,
    pub earliest_meal: Option<String>,
    pub latest_meal: Option<String>,
}

impl FullExport {
    /// Snapshot the store
    pub fn from_store<S: KeyValueStore>(store: &RecordStore<S>) -> Self {
        let records = store.records().to_vec();
        let summary = Summary::compute(&records, store.advance());

        let metadata = ExportMetadata {
            meal_count: summary.meal_count,
            total_cost: summary.total_cost,
            balance: summary.balance,
            earliest_meal: records.iter().map(|r| r.date).min().map(|d| d.to_string()),
            latest_meal: records.iter().map(|r| r.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            prices: store.prices(),
            advance: store.advance(),
            records,
            metadata,
        }
    }
}

/// Write the full store state as JSON
pub fn export_json<S: KeyValueStore, W: Write>(
    store: &RecordStore<S>,
    writer: &mut W,
    pretty: bool,
) -> TiffinResult<()> {
    let export = FullExport::from_store(store);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| TiffinError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| TiffinError::Export(e.to_string()))?;

    Ok(())
}
