//! Month grouping
//!
//! Buckets records by calendar month, most recent month first. Records keep
//! their incoming order inside each bucket.

use std::collections::BTreeMap;

use crate::models::{MealRecord, Money, MonthKey};

/// Records of one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    pub month: MonthKey,
    pub records: Vec<MealRecord>,
}

impl MonthGroup {
    pub fn total(&self) -> Money {
        month_total(&self.records)
    }
}

/// Partition records into month buckets, newest month first
pub fn group_by_month(records: &[MealRecord]) -> Vec<MonthGroup> {
    let mut buckets: BTreeMap<MonthKey, Vec<MealRecord>> = BTreeMap::new();
    for record in records {
        buckets
            .entry(MonthKey::from_date(record.date))
            .or_default()
            .push(record.clone());
    }

    buckets
        .into_iter()
        .rev()
        .map(|(month, records)| MonthGroup { month, records })
        .collect()
}

/// Sum of prices in one month bucket
pub fn month_total(month_records: &[MealRecord]) -> Money {
    month_records.iter().map(|r| r.price).sum()
}
