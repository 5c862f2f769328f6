//! Core data models for TiffinCLI
//!
//! This module contains the data structures of the meal-tracking domain:
//! meal records, the price config, money amounts, and month keys.

pub mod ids;
pub mod meal;
pub mod money;
pub mod month;
pub mod prices;

pub use ids::RecordId;
pub use meal::{MealRecord, MealSelection, MealType};
pub use money::{parse_non_negative_amount, Money};
pub use month::MonthKey;
pub use prices::PriceConfig;
