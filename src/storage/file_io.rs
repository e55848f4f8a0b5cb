//! File I/O utilities with atomic writes
//!
//! Reads distinguish "missing" from "unreadable" from "corrupt" so the store
//! can log why it fell back to a default. Writes go through a temp file and a
//! rename so a crash never leaves a half-written resource behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FinplanError;

/// Why a resource could not be loaded
///
/// Never surfaced to the user: the store substitutes the caller's default.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("resource does not exist")]
    Missing,
    #[error("resource could not be read: {0}")]
    Unreadable(std::io::Error),
    #[error("resource is not valid JSON for this record: {0}")]
    Corrupt(serde_json::Error),
}

/// Read JSON from a file
pub fn read_json<T, P>(path: P) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = match File::open(path.as_ref()) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(LoadError::Missing),
        Err(e) => return Err(LoadError::Unreadable(e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            LoadError::Unreadable(e.into())
        } else {
            LoadError::Corrupt(e)
        }
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely replaced or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FinplanError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FinplanError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| {
        FinplanError::Storage(format!("Failed to create {}: {}", temp_path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| FinplanError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| FinplanError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FinplanError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FinplanError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let result: Result<TestData, _> = read_json(&path);
        assert!(matches!(result, Err(LoadError::Missing)));
    }

    #[test]
    fn test_read_invalid_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invalid.json");
        fs::write(&path, "not json at all").unwrap();

        let result: Result<TestData, _> = read_json(&path);
        assert!(matches!(result, Err(LoadError::Corrupt(_))));

        // valid JSON of the wrong shape is corrupt too
        fs::write(&path, "[1, 2, 3]").unwrap();
        let result: Result<TestData, _> = read_json(&path);
        assert!(matches!(result, Err(LoadError::Corrupt(_))));
    }

    #[test]
    fn test_read_directory_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let result: Result<TestData, _> = read_json(temp_dir.path());
        assert!(matches!(
            result,
            Err(LoadError::Unreadable(_)) | Err(LoadError::Corrupt(_))
        ));
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();
        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("test.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_into_file_as_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let result = write_json_atomic(blocker.join("test.json"), &TestData::default());
        assert!(matches!(result, Err(FinplanError::Storage(_))));
    }
}
