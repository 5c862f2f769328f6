//! In-memory key-value store

use std::collections::HashMap;

use crate::error::{TiffinError, TiffinResult};

use super::KeyValueStore;

/// HashMap-backed store; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: HashMap<String, String>,
    writes: usize,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `(key, value)` pairs
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            data: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Make every subsequent `set` fail
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Number of successful writes since creation
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TiffinResult<Option<String>> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TiffinResult<()> {
        if self.read_only {
            return Err(TiffinError::Storage(format!(
                "Store is read-only, cannot write '{}'",
                key
            )));
        }
        self.data.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
