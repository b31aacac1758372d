//! JSON file storage backend
//!
//! The record collection is persisted as a pretty-printed JSON array of flat
//! objects. Non-ASCII text is written as literal characters, so any Unicode
//! field content round-trips byte-for-byte through the file.

use crate::book_log;
use crate::error::{PhoneBookError, PhoneBookResult};
use crate::logger::LogLevel;
use crate::record::PhoneBookRecord;
use crate::repository::traits::RecordStorage;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-based record storage
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage handle for the given database file path.
    ///
    /// The file does not have to exist yet; a missing file reads as an
    /// empty directory and is created on the first save.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing database file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl RecordStorage for JsonFileStorage {
    fn load_records(&self) -> PhoneBookResult<Vec<PhoneBookRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // Absent database is a normal first run, not a failure
                book_log!(
                    LogLevel::Info,
                    "storage",
                    "No existing database at {}, starting empty",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(PhoneBookError::StorageLoadFailed(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let records: Vec<PhoneBookRecord> = serde_json::from_str(&contents)?;
        book_log!(
            LogLevel::Debug,
            "storage",
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn save_records(&self, records: &[PhoneBookRecord]) -> PhoneBookResult<()> {
        let json = serde_json::to_string_pretty(records)?;

        // Write to a sibling temp file, then rename over the target so a
        // failed write never truncates the existing database
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json.as_bytes())
            .map_err(|e| PhoneBookError::StorageSaveFailed(format!("{}: {}", tmp_path.display(), e)))?;
        fs::rename(&tmp_path, &self.path)
            .map_err(|e| PhoneBookError::StorageSaveFailed(format!("{}: {}", self.path.display(), e)))?;

        book_log!(
            LogLevel::Debug,
            "storage",
            "Saved {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(id: u64, last_name: &str) -> PhoneBookRecord {
        PhoneBookRecord {
            id,
            last_name: last_name.to_string(),
            first_name: "Анна".to_string(),
            middle_name: "Петровна".to_string(),
            organization: "НИИ «Заря»".to_string(),
            work_phone: "+7 812 111-22-33".to_string(),
            personal_phone: String::new(),
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("no-such-db.json"));
        assert!(storage.load_records().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip_with_unicode() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("phonebook-db.json"));

        let records = vec![record(1, "Иванова"), record(2, "Müller")];
        storage.save_records(&records).unwrap();

        let loaded = storage.load_records().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_file_keeps_non_ascii_literal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("phonebook-db.json");
        let storage = JsonFileStorage::new(path.clone());

        storage.save_records(&[record(1, "Иванова")]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Иванова"));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("phonebook-db.json"));

        storage
            .save_records(&[record(1, "Old"), record(2, "Older")])
            .unwrap();
        storage.save_records(&[record(1, "New")]).unwrap();

        let loaded = storage.load_records().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].last_name, "New");
    }

    #[test]
    fn test_corrupt_file_is_a_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("phonebook-db.json");
        fs::write(&path, "{ not json").unwrap();

        let storage = JsonFileStorage::new(path);
        assert!(matches!(
            storage.load_records(),
            Err(PhoneBookError::Json(_))
        ));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("phonebook-db.json");
        let storage = JsonFileStorage::new(path);

        storage.save_records(&[record(1, "Ivanov")]).unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["phonebook-db.json".to_string()]);
    }
}
