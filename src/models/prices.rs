//! Per-meal price configuration

use serde::{Deserialize, Serialize};

use super::meal::MealType;
use super::money::Money;

/// Price stamped onto newly added records, per meal type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceConfig {
    pub morning: Money,
    pub evening: Money,
}

impl PriceConfig {
    pub fn new(morning: Money, evening: Money) -> Self {
        Self { morning, evening }
    }

    /// Current price for a meal type
    pub fn price_for(&self, meal_type: MealType) -> Money {
        match meal_type {
            MealType::Morning => self.morning,
            MealType::Evening => self.evening,
        }
    }

    /// Same config with negative prices raised to zero
    pub fn clamped(self) -> Self {
        Self {
            morning: self.morning.clamp_non_negative(),
            evening: self.evening.clamp_non_negative(),
        }
    }
}
