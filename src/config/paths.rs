//! Path management for TiffinCLI
//!
//! Provides platform-aware path resolution for configuration, data, and the
//! audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `TIFFIN_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `tiffin-cli`
//!    (`~/.config/tiffin-cli` on Linux, `%APPDATA%\tiffin-cli\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TiffinError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "TIFFIN_DATA_DIR";

/// Manages all paths used by TiffinCLI
#[derive(Debug, Clone)]
pub struct TiffinPaths {
    /// Base directory for all TiffinCLI data
    base_dir: PathBuf,
}

impl TiffinPaths {
    /// Create a new TiffinPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, TiffinError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TiffinPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the key-value files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), TiffinError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TiffinError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TiffinError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, TiffinError> {
    ProjectDirs::from("", "", "tiffin-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TiffinError::Config("Could not determine home directory".into()))
}
