//! Meal record model
//!
//! A meal record is an immutable snapshot: the price is copied from the price
//! config when the record is created and never changes afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecordId;
use super::money::Money;

/// Which meal of the day a record is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Morning,
    Evening,
}

impl MealType {
    /// All meal types in the order records are created
    pub fn all() -> &'static [MealType] {
        &[MealType::Morning, MealType::Evening]
    }

    /// Capitalized label used in exports and listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Evening => "Evening",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The meal types ticked for one add action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MealSelection {
    pub morning: bool,
    pub evening: bool,
}

impl MealSelection {
    pub fn new(morning: bool, evening: bool) -> Self {
        Self { morning, evening }
    }

    pub fn both() -> Self {
        Self::new(true, true)
    }

    pub fn is_empty(&self) -> bool {
        !self.morning && !self.evening
    }

    /// Selected meal types, morning first
    pub fn types(&self) -> Vec<MealType> {
        MealType::all()
            .iter()
            .copied()
            .filter(|t| match t {
                MealType::Morning => self.morning,
                MealType::Evening => self.evening,
            })
            .collect()
    }
}

/// A single logged meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: RecordId,

    /// Calendar date of the meal, stored as `YYYY-MM-DD`
    pub date: NaiveDate,

    #[serde(rename = "type")]
    pub meal_type: MealType,

    /// Price captured when the record was added
    pub price: Money,
}

impl MealRecord {
    /// Create a record with a fresh id
    pub fn new(date: NaiveDate, meal_type: MealType, price: Money) -> Self {
        Self {
            id: RecordId::new(),
            date,
            meal_type,
            price,
        }
    }
}
