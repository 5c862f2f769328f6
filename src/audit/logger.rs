//! Append-only JSONL audit log
//!
//! One JSON object per line. Lines are only ever appended, so the file reads
//! oldest change first.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{TiffinError, TiffinResult};

use super::entry::AuditEntry;

/// Writer and reader for the audit log file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append `entries` in order; an empty slice leaves the file untouched
    pub fn log_batch(&self, entries: &[AuditEntry]) -> TiffinResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut lines = String::new();
        for entry in entries {
            lines.push_str(&serde_json::to_string(entry)?);
            lines.push('\n');
        }

        let mut file = self.open_for_append()?;
        file.write_all(lines.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| audit_io("append to", &self.log_path, e))
    }

    /// Every entry in the log, oldest first
    pub fn read_all(&self) -> TiffinResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(audit_io("open", &self.log_path, e)),
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| audit_io("read", &self.log_path, e))?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).map_err(|e| {
                TiffinError::Json(format!("audit log line {} is not a valid entry: {}", index + 1, e))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> TiffinResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }

    pub fn exists(&self) -> bool {
        self.log_path.is_file()
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    fn open_for_append(&self) -> TiffinResult<File> {
        if let Some(dir) = self.log_path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| audit_io("create directory for", dir, e))?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| audit_io("open", &self.log_path, e))
    }
}

fn audit_io(action: &str, path: &Path, err: std::io::Error) -> TiffinError {
    TiffinError::Io(format!("could not {} audit log {}: {}", action, path.display(), err))
}
