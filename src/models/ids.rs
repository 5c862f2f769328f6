//! Meal record identifiers
//!
//! Ids are opaque strings on disk. New ids are random UUIDs, but any
//! non-empty string loaded from storage is accepted as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the abbreviated id shown in listings
pub const SHORT_ID_LEN: usize = 8;

/// Unique identifier of a meal record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for display (first 8 characters)
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Whether `query` is this id or a prefix of it
    pub fn matches_prefix(&self, query: &str) -> bool {
        !query.is_empty() && self.0.starts_with(query)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique_uuids() {
        let a = RecordId::new();
        let b = RecordId::new();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_short() {
        let id = RecordId::from("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(id.short(), "550e8400");

        let legacy = RecordId::from("abc");
        assert_eq!(legacy.short(), "abc");
    }

    #[test]
    fn test_matches_prefix() {
        let id = RecordId::from("1717200000000-morning");
        assert!(id.matches_prefix("1717"));
        assert!(id.matches_prefix("1717200000000-morning"));
        assert!(!id.matches_prefix("morning"));
        assert!(!id.matches_prefix(""));
    }

    #[test]
    fn test_serialization_is_plain_string() {
        let id = RecordId::from("1717200000000-evening");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1717200000000-evening\"");

        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
