//! Whole-file reads and crash-safe replacement of key files
//!
//! A key file is replaced by writing a sibling `<name>.tmp`, syncing it, and
//! renaming it over the original. Readers see either the old or the new
//! contents.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{TiffinError, TiffinResult};

/// Contents of `path`, or `None` when there is no such file
pub fn read_optional<P: AsRef<Path>>(path: P) -> TiffinResult<Option<String>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(storage_err("read", path, e)),
    }
}

/// Replace `path` with `contents`, creating missing parent directories
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &str) -> TiffinResult<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_err("create", dir, e))?;
    }

    let staging = staging_path(path);
    let staged = File::create(&staging).and_then(|mut file| {
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = staged {
        let _ = fs::remove_file(&staging);
        return Err(storage_err("write", &staging, e));
    }

    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        storage_err("replace", path, e)
    })
}

/// Sibling path used while a write is in flight
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn storage_err(action: &str, path: &Path, err: std::io::Error) -> TiffinError {
    TiffinError::Storage(format!("could not {} {}: {}", action, path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert_eq!(read_optional(&path).unwrap(), None);
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prices.json");

        write_atomic(&path, r#"{"morning":50,"evening":60}"#).unwrap();

        let loaded = read_optional(&path).unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"{"morning":50,"evening":60}"#));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("advance.json");

        write_atomic(&path, "1000").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("advance.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("records.json");

        write_atomic(&path, "[]").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(read_optional(temp_dir.path()).is_err());
    }

    #[test]
    fn test_overwrite_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("advance.json");

        write_atomic(&path, "1000").unwrap();
        write_atomic(&path, "250.5").unwrap();

        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("250.5"));
    }
}
