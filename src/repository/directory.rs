//! Directory repository
//!
//! `PhoneBookDirectory` is the sole authority over the live record
//! collection. It loads the full set once at construction and writes the
//! full set back after every mutation, so the in-memory sequence and the
//! durable sequence never diverge across a successful call boundary.
//!
//! Records are kept in insertion order and ids are assigned as
//! `len + 1`. With no deletion in the lifecycle, a record's position is
//! always `id - 1`; the console adapter relies on this when addressing a
//! record to edit.

use crate::book_log;
use crate::error::{PhoneBookError, PhoneBookResult};
use crate::logger::LogLevel;
use crate::record::{PhoneBookRecord, SearchField};
use crate::repository::traits::RecordStorage;
use std::collections::HashMap;

/// In-memory record collection backed by durable storage
pub struct PhoneBookDirectory {
    storage: Box<dyn RecordStorage>,
    records: Vec<PhoneBookRecord>,
}

impl PhoneBookDirectory {
    /// Open the directory, eagerly loading all records from storage.
    pub fn open(storage: Box<dyn RecordStorage>) -> PhoneBookResult<Self> {
        let records = storage.load_records()?;
        book_log!(
            LogLevel::Info,
            "directory",
            "Directory opened with {} records",
            records.len()
        );
        Ok(Self { storage, records })
    }

    /// Id for the next record to be added: `len + 1`.
    pub fn next_id(&self) -> u64 {
        self.records.len() as u64 + 1
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[PhoneBookRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record and persist the full collection.
    ///
    /// The caller supplies the record's id and is expected to have taken it
    /// from `next_id()`. A failed save leaves the in-memory append in place
    /// and surfaces the storage error; there is no rollback.
    pub fn add(&mut self, record: PhoneBookRecord) -> PhoneBookResult<()> {
        let id = record.id;
        self.records.push(record);
        self.storage.save_records(&self.records)?;
        book_log!(LogLevel::Debug, "directory", "Added record id={}", id);
        Ok(())
    }

    /// Replace the record at zero-based `position` and persist.
    pub fn update(&mut self, position: usize, record: PhoneBookRecord) -> PhoneBookResult<()> {
        if position >= self.records.len() {
            return Err(PhoneBookError::InvalidPosition {
                position,
                len: self.records.len(),
            });
        }
        self.records[position] = record;
        self.storage.save_records(&self.records)?;
        book_log!(
            LogLevel::Debug,
            "directory",
            "Updated record at position {}",
            position
        );
        Ok(())
    }

    /// Find every record matching all given criteria.
    ///
    /// Each criterion is a (field name, query) pair; a record matches when
    /// every named field contains its query as a case-insensitive
    /// substring. Empty criteria match the whole directory. Field names
    /// outside the searchable set are rejected with `UnknownSearchField`.
    pub fn search(
        &self,
        criteria: &HashMap<String, String>,
    ) -> PhoneBookResult<Vec<PhoneBookRecord>> {
        let mut parsed: Vec<(SearchField, String)> = Vec::with_capacity(criteria.len());
        for (name, query) in criteria {
            let field = SearchField::parse(name)
                .ok_or_else(|| PhoneBookError::UnknownSearchField(name.clone()))?;
            parsed.push((field, query.to_lowercase()));
        }

        let matches: Vec<PhoneBookRecord> = self
            .records
            .iter()
            .filter(|record| {
                parsed
                    .iter()
                    .all(|(field, query)| field.value_of(record).to_lowercase().contains(query.as_str()))
            })
            .cloned()
            .collect();

        book_log!(
            LogLevel::Debug,
            "directory",
            "Search with {} criteria matched {} records",
            parsed.len(),
            matches.len()
        );
        Ok(matches)
    }

    /// One page of records, 1-based page number.
    ///
    /// Pages past the end of the collection are empty, and a partial last
    /// page holds just the remaining records.
    pub fn page(&self, page_number: usize, page_size: usize) -> &[PhoneBookRecord] {
        if page_number == 0 || page_size == 0 {
            return &[];
        }
        let start = (page_number - 1).saturating_mul(page_size).min(self.records.len());
        let end = start.saturating_add(page_size).min(self.records.len());
        &self.records[start..end]
    }

    /// Number of pages at the given page size (0 for an empty directory).
    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.records.len().div_ceil(page_size)
    }
}
