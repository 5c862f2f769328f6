//! Cost totals and advance balance
//!
//! Pure functions over a record slice; nothing here touches storage.

use crate::models::{MealRecord, MealType, Money};

/// Sum of all record prices
pub fn total_cost(records: &[MealRecord]) -> Money {
    records.iter().map(|r| r.price).sum()
}

/// Advance minus total cost; negative once the advance is used up
pub fn remaining_balance(advance: Money, total_cost: Money) -> Money {
    advance - total_cost
}

/// Headline numbers for the whole record list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub meal_count: usize,
    pub morning_count: usize,
    pub evening_count: usize,
    pub total_cost: Money,
    pub advance: Money,
    pub balance: Money,
}

impl Summary {
    pub fn compute(records: &[MealRecord], advance: Money) -> Self {
        let total = total_cost(records);
        let morning_count = records
            .iter()
            .filter(|r| r.meal_type == MealType::Morning)
            .count();

        Self {
            meal_count: records.len(),
            morning_count,
            evening_count: records.len() - morning_count,
            total_cost: total,
            advance,
            balance: remaining_balance(advance, total),
        }
    }

    /// Whether the advance no longer covers the meals taken
    pub fn is_overdrawn(&self) -> bool {
        self.balance.is_negative()
    }
}
