//! File-backed key-value store
//!
//! Each key maps to `<dir>/<key>.json`.

use std::path::PathBuf;

use crate::config::paths::TiffinPaths;
use crate::error::{TiffinError, TiffinResult};

use super::file_io::{read_optional, write_atomic};
use super::KeyValueStore;

/// Key-value store keeping one file per key in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Create a store in the data directory, making sure it exists
    pub fn open(paths: &TiffinPaths) -> TiffinResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(paths.data_dir()))
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// File path backing a key
    pub fn path_for(&self, key: &str) -> TiffinResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(TiffinError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> TiffinResult<Option<String>> {
        read_optional(self.path_for(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> TiffinResult<()> {
        write_atomic(self.path_for(key)?, value)
    }
}
