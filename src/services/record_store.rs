//! Record store
//!
//! Owns the meal record list, the price config, and the advance amount.
//! Every mutation is written through the persistence port before it is
//! applied in memory, so a failed write leaves the store unchanged. Loading
//! is fail-soft: missing or corrupt slices fall back to defaults.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::error::{TiffinError, TiffinResult};
use crate::models::{
    parse_non_negative_amount, MealRecord, MealSelection, Money, PriceConfig, RecordId,
};
use crate::reports::Summary;
use crate::storage::{KeyValueStore, ADVANCE_KEY, PRICES_KEY, RECORDS_KEY};

/// Lifecycle of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// No price config has been saved yet; records cannot be added
    AwaitingPriceConfig,
    Ready,
}

/// Owner of all meal-tracking state
pub struct RecordStore<S: KeyValueStore> {
    port: S,
    /// Always sorted by date descending, ties in insertion order
    records: Vec<MealRecord>,
    prices: Option<PriceConfig>,
    advance: Money,
    audit: Option<AuditLogger>,
    warnings: Vec<String>,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Load the three persisted slices from `port`
    ///
    /// Never fails: unreadable or malformed slices are treated as absent and
    /// described in [`RecordStore::warnings`].
    pub fn initialize(port: S) -> Self {
        let mut warnings = Vec::new();

        let records = load_records(&port, &mut warnings);

        let prices = load_json::<PriceConfig>(&port, PRICES_KEY, &mut warnings)
            .map(PriceConfig::clamped);

        let advance = match read_slice(&port, ADVANCE_KEY, &mut warnings) {
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    Money::from_major_f64(value).clamp_non_negative()
                }
                _ => {
                    warnings.push(format!("Ignoring invalid advance amount '{}'", raw.trim()));
                    Money::zero()
                }
            },
            None => Money::zero(),
        };

        Self {
            port,
            records,
            prices,
            advance,
            audit: None,
            warnings,
        }
    }

    /// Record every mutation in `logger`
    pub fn with_audit_logger(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn state(&self) -> StoreState {
        if self.prices.is_some() {
            StoreState::Ready
        } else {
            StoreState::AwaitingPriceConfig
        }
    }

    /// Whether the price setup flow must run before records can be added
    pub fn needs_price_setup(&self) -> bool {
        self.state() == StoreState::AwaitingPriceConfig
    }

    /// Records, newest date first
    pub fn records(&self) -> &[MealRecord] {
        &self.records
    }

    /// Saved price config, `None` until prices are set
    pub fn prices(&self) -> Option<PriceConfig> {
        self.prices
    }

    /// Saved price config, or zero prices if never set
    pub fn current_prices(&self) -> PriceConfig {
        self.prices.unwrap_or_default()
    }

    pub fn advance(&self) -> Money {
        self.advance
    }

    /// Problems found while loading persisted state or writing the audit log
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn port(&self) -> &S {
        &self.port
    }

    /// Totals derived from the current state
    pub fn summary(&self) -> Summary {
        Summary::compute(&self.records, self.advance)
    }

    /// Add one record per selected meal type on `date`
    ///
    /// Each record is stamped with the current price for its type. Returns
    /// the created records, morning first.
    pub fn add_record(
        &mut self,
        date: NaiveDate,
        selection: MealSelection,
    ) -> TiffinResult<Vec<MealRecord>> {
        if selection.is_empty() {
            return Err(TiffinError::Validation(
                "Please select at least one meal type".into(),
            ));
        }

        let prices = self.prices.ok_or(TiffinError::PricesNotConfigured)?;

        let mut taken: HashSet<RecordId> = self.records.iter().map(|r| r.id.clone()).collect();
        let mut created = Vec::new();
        for meal_type in selection.types() {
            let mut record = MealRecord::new(date, meal_type, prices.price_for(meal_type));
            while !taken.insert(record.id.clone()) {
                record.id = RecordId::new();
            }
            created.push(record);
        }

        let entries: Vec<_> = created
            .iter()
            .map(|r| {
                AuditEntry::create(
                    EntityType::MealRecord,
                    r.id.to_string(),
                    Some(describe(r)),
                    r,
                )
            })
            .collect();

        let mut next = self.records.clone();
        next.extend(created.iter().cloned());
        sort_newest_first(&mut next);

        self.write_records(&next)?;
        self.records = next;
        self.audit_batch(&entries);

        Ok(created)
    }

    /// Remove the record with `id`
    ///
    /// Returns the removed record, or `None` (without writing) if no record
    /// has that id.
    pub fn delete_record(&mut self, id: &RecordId) -> TiffinResult<Option<MealRecord>> {
        let Some(pos) = self.records.iter().position(|r| &r.id == id) else {
            return Ok(None);
        };

        let mut next = self.records.clone();
        let removed = next.remove(pos);
        let entry = AuditEntry::delete(
            EntityType::MealRecord,
            removed.id.to_string(),
            Some(describe(&removed)),
            &removed,
        );

        self.write_records(&next)?;
        self.records = next;
        self.audit_batch(&[entry]);

        Ok(Some(removed))
    }

    /// Replace the price config from raw user input
    ///
    /// Each input goes through [`parse_non_negative_amount`]. Existing
    /// records keep the price they were created with.
    pub fn set_prices(&mut self, morning: &str, evening: &str) -> TiffinResult<PriceConfig> {
        let prices = PriceConfig::new(
            parse_non_negative_amount(morning),
            parse_non_negative_amount(evening),
        );
        self.replace_prices(prices)?;
        Ok(prices)
    }

    /// Replace the price config wholesale
    pub fn replace_prices(&mut self, prices: PriceConfig) -> TiffinResult<()> {
        let prices = prices.clamped();
        let json = serde_json::to_string(&prices)?;

        let entry = match self.prices {
            Some(before) => {
                let diff = generate_diff(
                    &serde_json::to_value(before)?,
                    &serde_json::to_value(prices)?,
                );
                AuditEntry::update(EntityType::Prices, PRICES_KEY, None, &before, &prices, diff)
            }
            None => AuditEntry::create(EntityType::Prices, PRICES_KEY, None, &prices),
        };

        self.port.set(PRICES_KEY, &json)?;
        self.prices = Some(prices);
        self.audit_batch(&[entry]);
        Ok(())
    }

    /// Replace the advance amount from raw user input
    pub fn set_advance(&mut self, amount: &str) -> TiffinResult<Money> {
        let advance = parse_non_negative_amount(amount);
        self.replace_advance(advance)?;
        Ok(advance)
    }

    /// Replace the advance amount wholesale
    pub fn replace_advance(&mut self, advance: Money) -> TiffinResult<()> {
        let advance = advance.clamp_non_negative();
        let before = self.advance;
        let diff = generate_diff(
            &serde_json::to_value(before)?,
            &serde_json::to_value(advance)?,
        );
        let entry = AuditEntry::update(EntityType::Advance, ADVANCE_KEY, None, &before, &advance, diff);

        self.port.set(ADVANCE_KEY, &advance.to_decimal_string())?;
        self.advance = advance;
        self.audit_batch(&[entry]);
        Ok(())
    }

    /// Find a record by full id or unambiguous id prefix
    pub fn find_record(&self, query: &str) -> TiffinResult<Option<&MealRecord>> {
        let query = query.trim();
        if let Some(exact) = self.records.iter().find(|r| r.id.as_str() == query) {
            return Ok(Some(exact));
        }

        let mut matches = self.records.iter().filter(|r| r.id.matches_prefix(query));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(Some(record)),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(TiffinError::Validation(format!(
                "Id prefix '{}' matches more than one record",
                query
            ))),
        }
    }

    fn write_records(&mut self, records: &[MealRecord]) -> TiffinResult<()> {
        let json = serde_json::to_string(records)?;
        self.port.set(RECORDS_KEY, &json)
    }

    /// Log entries for an already committed change; a failure becomes a warning
    fn audit_batch(&mut self, entries: &[AuditEntry]) {
        let Some(logger) = &self.audit else {
            return;
        };
        if let Err(e) = logger.log_batch(entries) {
            self.warnings.push(format!("Change saved but not audited: {}", e));
        }
    }
}

/// Stable sort by date, newest first
fn sort_newest_first(records: &mut [MealRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

fn describe(record: &MealRecord) -> String {
    format!("{} {}", record.date, record.meal_type)
}

fn read_slice<S: KeyValueStore>(port: &S, key: &str, warnings: &mut Vec<String>) -> Option<String> {
    match port.get(key) {
        Ok(value) => value,
        Err(e) => {
            warnings.push(format!("Could not read '{}': {}", key, e));
            None
        }
    }
}

fn load_json<T: DeserializeOwned>(
    port: &impl KeyValueStore,
    key: &str,
    warnings: &mut Vec<String>,
) -> Option<T> {
    let raw = read_slice(port, key, warnings)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warnings.push(format!("Ignoring corrupt '{}' data: {}", key, e));
            None
        }
    }
}

/// Load records, dropping malformed entries and duplicate ids
fn load_records(port: &impl KeyValueStore, warnings: &mut Vec<String>) -> Vec<MealRecord> {
    let Some(values) = load_json::<Vec<serde_json::Value>>(port, RECORDS_KEY, warnings) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<MealRecord>(value) {
            Ok(mut record) => {
                if record.id.as_str().is_empty() || !seen.insert(record.id.clone()) {
                    warnings.push(format!(
                        "Skipping record {} with missing or duplicate id '{}'",
                        index, record.id
                    ));
                    continue;
                }
                record.price = record.price.clamp_non_negative();
                records.push(record);
            }
            Err(e) => warnings.push(format!("Skipping malformed record {}: {}", index, e)),
        }
    }

    sort_newest_first(&mut records);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use crate::reports::{group_by_month, month_total, remaining_balance, total_cost};
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ready_store() -> RecordStore<MemoryStore> {
        let mut store = RecordStore::initialize(MemoryStore::new());
        store.set_prices("50", "60").unwrap();
        store.set_advance("1000").unwrap();
        store
    }

    #[test]
    fn test_fresh_store_awaits_price_config() {
        let store = RecordStore::initialize(MemoryStore::new());

        assert_eq!(store.state(), StoreState::AwaitingPriceConfig);
        assert!(store.needs_price_setup());
        assert!(store.records().is_empty());
        assert_eq!(store.advance(), Money::zero());
        assert!(store.warnings().is_empty());
    }

    #[test]
    fn test_add_before_prices_is_rejected() {
        let mut store = RecordStore::initialize(MemoryStore::new());

        let err = store
            .add_record(date("2024-06-01"), MealSelection::both())
            .unwrap_err();

        assert!(matches!(err, TiffinError::PricesNotConfigured));
        assert!(store.records().is_empty());
        assert_eq!(store.port().write_count(), 0);
    }

    #[test]
    fn test_add_both_meals_scenario() {
        let mut store = ready_store();

        let created = store
            .add_record(date("2024-06-01"), MealSelection::both())
            .unwrap();

        assert_eq!(created.len(), 2);
        let records = store.records();
        assert_eq!(records[0].meal_type, MealType::Morning);
        assert_eq!(records[0].price, Money::from_whole(50));
        assert_eq!(records[1].meal_type, MealType::Evening);
        assert_eq!(records[1].price, Money::from_whole(60));

        let total = total_cost(records);
        assert_eq!(total, Money::from_whole(110));
        assert_eq!(remaining_balance(store.advance(), total), Money::from_whole(890));
    }

    #[test]
    fn test_add_without_selection_is_validation_error() {
        let mut store = ready_store();
        store
            .add_record(date("2024-06-01"), MealSelection::new(true, false))
            .unwrap();
        let writes = store.port().write_count();

        let err = store
            .add_record(date("2024-06-02"), MealSelection::default())
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.port().write_count(), writes);
    }

    #[test]
    fn test_records_stay_sorted_newest_first() {
        let mut store = ready_store();
        store
            .add_record(date("2024-06-15"), MealSelection::new(true, false))
            .unwrap();
        store
            .add_record(date("2024-07-01"), MealSelection::new(false, true))
            .unwrap();
        store
            .add_record(date("2024-06-20"), MealSelection::both())
            .unwrap();

        let dates: Vec<_> = store.records().iter().map(|r| r.date.to_string()).collect();
        assert_eq!(
            dates,
            vec!["2024-07-01", "2024-06-20", "2024-06-20", "2024-06-15"]
        );
    }

    #[test]
    fn test_same_date_keeps_insertion_order() {
        let mut store = ready_store();
        let first = store
            .add_record(date("2024-06-01"), MealSelection::new(false, true))
            .unwrap();
        let second = store
            .add_record(date("2024-06-01"), MealSelection::new(true, false))
            .unwrap();

        assert_eq!(store.records()[0].id, first[0].id);
        assert_eq!(store.records()[1].id, second[0].id);
    }

    #[test]
    fn test_duplicates_for_same_date_and_type_allowed() {
        let mut store = ready_store();
        store
            .add_record(date("2024-06-01"), MealSelection::new(true, false))
            .unwrap();
        store
            .add_record(date("2024-06-01"), MealSelection::new(true, false))
            .unwrap();

        assert_eq!(store.records().len(), 2);
        assert_ne!(store.records()[0].id, store.records()[1].id);
    }

    #[test]
    fn test_price_change_does_not_touch_existing_records() {
        let mut store = ready_store();
        store
            .add_record(date("2024-06-01"), MealSelection::both())
            .unwrap();

        store.set_prices("70", "80").unwrap();
        store
            .add_record(date("2024-06-02"), MealSelection::new(true, false))
            .unwrap();

        let prices: Vec<_> = store.records().iter().map(|r| r.price).collect();
        assert_eq!(
            prices,
            vec![Money::from_whole(70), Money::from_whole(50), Money::from_whole(60)]
        );
    }

    #[test]
    fn test_set_prices_invalid_input_defaults_to_zero() {
        let mut store = RecordStore::initialize(MemoryStore::new());

        let prices = store.set_prices("", "abc").unwrap();

        assert_eq!(prices, PriceConfig::new(Money::zero(), Money::zero()));
        assert_eq!(store.prices(), Some(prices));
        assert_eq!(store.state(), StoreState::Ready);
    }

    #[test]
    fn test_set_advance_parses_and_clamps() {
        let mut store = RecordStore::initialize(MemoryStore::new());

        assert_eq!(store.set_advance("1500.5").unwrap(), Money::from_minor(150050));
        assert_eq!(store.port().raw(ADVANCE_KEY), Some("1500.5"));

        assert_eq!(store.set_advance("-200").unwrap(), Money::zero());
        assert_eq!(store.set_advance("junk").unwrap(), Money::zero());
        assert_eq!(store.port().raw(ADVANCE_KEY), Some("0"));
    }

    #[test]
    fn test_delete_removes_exactly_one_and_keeps_order() {
        let mut store = ready_store();
        store
            .add_record(date("2024-06-01"), MealSelection::both())
            .unwrap();
        store
            .add_record(date("2024-06-02"), MealSelection::both())
            .unwrap();
        let before: Vec<_> = store.records().iter().map(|r| r.id.clone()).collect();

        let removed = store.delete_record(&before[1]).unwrap().unwrap();

        assert_eq!(removed.id, before[1]);
        let after: Vec<_> = store.records().iter().map(|r| r.id.clone()).collect();
        let expected: Vec<_> = before
            .iter()
            .filter(|id| **id != before[1])
            .cloned()
            .collect();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = ready_store();
        store
            .add_record(date("2024-06-01"), MealSelection::both())
            .unwrap();
        let writes = store.port().write_count();

        let removed = store.delete_record(&RecordId::from("missing")).unwrap();

        assert!(removed.is_none());
        assert_eq!(store.records().len(), 2);
        assert_eq!(store.port().write_count(), writes);
    }

    #[test]
    fn test_failed_write_leaves_state_unchanged() {
        let mut store = ready_store();
        store
            .add_record(date("2024-06-01"), MealSelection::both())
            .unwrap();

        let mut port = store.port().clone();
        port.set_read_only(true);
        let mut store = RecordStore::initialize(port);

        assert!(store
            .add_record(date("2024-06-02"), MealSelection::both())
            .is_err());
        assert_eq!(store.records().len(), 2);

        let id = store.records()[0].id.clone();
        assert!(store.delete_record(&id).is_err());
        assert_eq!(store.records().len(), 2);

        assert!(store.set_prices("1", "1").is_err());
        assert_eq!(store.current_prices().morning, Money::from_whole(50));

        assert!(store.set_advance("1").is_err());
        assert_eq!(store.advance(), Money::from_whole(1000));
    }

    #[test]
    fn test_persisted_layout() {
        let mut store = ready_store();
        let created = store
            .add_record(date("2024-06-01"), MealSelection::new(true, false))
            .unwrap();

        let port = store.port();
        assert_eq!(port.raw(PRICES_KEY), Some(r#"{"morning":50,"evening":60}"#));
        assert_eq!(port.raw(ADVANCE_KEY), Some("1000"));

        let records: serde_json::Value =
            serde_json::from_str(port.raw(RECORDS_KEY).unwrap()).unwrap();
        assert_eq!(
            records,
            serde_json::json!([{
                "id": created[0].id.as_str(),
                "date": "2024-06-01",
                "type": "morning",
                "price": 50
            }])
        );
    }

    #[test]
    fn test_initialize_reads_existing_slices() {
        let port = MemoryStore::with_entries([
            (
                RECORDS_KEY,
                r#"[{"id":"a","date":"2024-06-15","type":"morning","price":50},
                    {"id":"b","date":"2024-07-01","type":"evening","price":60}]"#,
            ),
            (PRICES_KEY, r#"{"morning":55,"evening":65}"#),
            (ADVANCE_KEY, "2000"),
        ]);

        let store = RecordStore::initialize(port);

        assert_eq!(store.state(), StoreState::Ready);
        assert_eq!(store.records()[0].id.as_str(), "b");
        assert_eq!(store.records()[1].id.as_str(), "a");
        assert_eq!(store.current_prices().morning, Money::from_whole(55));
        assert_eq!(store.advance(), Money::from_whole(2000));
        assert!(store.warnings().is_empty());
    }

    #[test]
    fn test_initialize_recovers_from_corrupt_slices() {
        let port = MemoryStore::with_entries([
            (RECORDS_KEY, "not json"),
            (PRICES_KEY, "{\"morning\":"),
            (ADVANCE_KEY, "lots"),
        ]);

        let store = RecordStore::initialize(port);

        assert!(store.records().is_empty());
        assert!(store.needs_price_setup());
        assert_eq!(store.advance(), Money::zero());
        assert_eq!(store.warnings().len(), 3);
    }

    #[test]
    fn test_initialize_drops_bad_and_duplicate_records() {
        let port = MemoryStore::with_entries([(
            RECORDS_KEY,
            r#"[{"id":"a","date":"2024-06-01","type":"morning","price":50},
                {"id":"a","date":"2024-06-02","type":"evening","price":60},
                {"id":"c","date":"June 3","type":"evening","price":60},
                {"id":"d","date":"2024-06-04","type":"evening","price":-5}]"#,
        )]);

        let store = RecordStore::initialize(port);

        let ids: Vec<_> = store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "a"]);
        assert_eq!(store.records()[0].price, Money::zero());
        assert_eq!(store.warnings().len(), 2);
    }

    #[test]
    fn test_find_record_by_prefix() {
        let port = MemoryStore::with_entries([
            (
                RECORDS_KEY,
                r#"[{"id":"abc-1","date":"2024-06-01","type":"morning","price":50},
                    {"id":"abd-2","date":"2024-06-01","type":"evening","price":60}]"#,
            ),
            (PRICES_KEY, r#"{"morning":50,"evening":60}"#),
        ]);
        let store = RecordStore::initialize(port);

        assert_eq!(store.find_record("abc").unwrap().unwrap().id.as_str(), "abc-1");
        assert_eq!(store.find_record("abd-2").unwrap().unwrap().id.as_str(), "abd-2");
        assert!(store.find_record("zzz").unwrap().is_none());
        assert!(store.find_record("ab").unwrap_err().is_validation());
    }

    #[test]
    fn test_month_partition_matches_total() {
        let mut store = ready_store();
        for d in ["2024-05-31", "2024-06-01", "2024-06-15", "2024-07-01"] {
            store.add_record(date(d), MealSelection::both()).unwrap();
        }

        let groups = group_by_month(store.records());
        let bucketed: usize = groups.iter().map(|g| g.records.len()).sum();
        let summed: Money = groups.iter().map(|g| month_total(&g.records)).sum();

        assert_eq!(bucketed, store.records().len());
        assert_eq!(summed, total_cost(store.records()));
    }

    #[test]
    fn test_file_backed_store_reloads() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");

        let mut store = RecordStore::initialize(FileStore::new(data_dir.clone()));
        store.set_prices("50", "60").unwrap();
        store.set_advance("1000").unwrap();
        store
            .add_record(date("2024-06-01"), MealSelection::both())
            .unwrap();

        let reloaded = RecordStore::initialize(FileStore::new(data_dir));
        assert_eq!(reloaded.records(), store.records());
        assert_eq!(reloaded.prices(), store.prices());
        assert_eq!(reloaded.advance(), Money::from_whole(1000));
        assert_eq!(reloaded.summary().balance, Money::from_whole(890));
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));

        let mut store = RecordStore::initialize(MemoryStore::new()).with_audit_logger(logger.clone());
        store.set_prices("50", "60").unwrap();
        store.set_prices("55", "60").unwrap();
        let created = store
            .add_record(date("2024-06-01"), MealSelection::both())
            .unwrap();
        store.delete_record(&created[0].id).unwrap();
        store.set_advance("500").unwrap();

        let entries = logger.read_all().unwrap();
        let kinds: Vec<_> = entries
            .iter()
            .map(|e| (e.operation.to_string(), e.entity_type.to_string()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("CREATE".to_string(), "Prices".to_string()),
                ("UPDATE".to_string(), "Prices".to_string()),
                ("CREATE".to_string(), "MealRecord".to_string()),
                ("CREATE".to_string(), "MealRecord".to_string()),
                ("DELETE".to_string(), "MealRecord".to_string()),
                ("UPDATE".to_string(), "Advance".to_string()),
            ]
        );
        assert_eq!(entries[1].diff_summary.as_deref(), Some("morning: 50 -> 55"));
        assert_eq!(entries[5].diff_summary.as_deref(), Some("0 -> 500"));
    }

    #[test]
    fn test_audit_failure_keeps_committed_change() {
        let temp_dir = TempDir::new().unwrap();
        let unwritable = AuditLogger::new(temp_dir.path().to_path_buf());

        let mut store = RecordStore::initialize(MemoryStore::new()).with_audit_logger(unwritable);
        store.set_prices("50", "60").unwrap();
        assert_eq!(store.warnings().len(), 1);

        let created = store
            .add_record(date("2024-06-01"), MealSelection::both())
            .unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(store.records().len(), 2);
        assert!(store.port().raw(RECORDS_KEY).is_some());
        assert_eq!(store.warnings().len(), 2);
        assert!(store.warnings()[1].contains("not audited"));

        store.delete_record(&created[0].id).unwrap();
        store.set_advance("100").unwrap();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.advance(), Money::from_whole(100));
        assert_eq!(store.warnings().len(), 4);
    }

    #[test]
    fn test_huge_prices_do_not_overflow_totals() {
        let mut store = RecordStore::initialize(MemoryStore::new());
        let prices = store
            .set_prices("99999999999999999999", "99999999999999999999")
            .unwrap();
        assert_eq!(prices.morning, Money::MAX);

        for _ in 0..3 {
            store
                .add_record(date("2024-06-01"), MealSelection::both())
                .unwrap();
        }

        let summary = store.summary();
        assert_eq!(summary.meal_count, 6);
        assert_eq!(summary.total_cost.minor(), Money::MAX.minor() * 6);
        assert_eq!(summary.balance.minor(), -Money::MAX.minor() * 6);

        let groups = group_by_month(store.records());
        assert_eq!(month_total(&groups[0].records), summary.total_cost);
    }

    #[test]
    fn test_huge_persisted_price_is_capped_on_load() {
        let port = MemoryStore::with_entries([(
            RECORDS_KEY,
            r#"[{"id":"a","date":"2024-06-01","type":"morning","price":1e300},
                {"id":"b","date":"2024-06-01","type":"evening","price":1e300}]"#,
        )]);

        let store = RecordStore::initialize(port);

        assert_eq!(store.records()[0].price, Money::MAX);
        assert_eq!(store.summary().total_cost.minor(), Money::MAX.minor() * 2);
    }
}
