//! Storage trait definition
//!
//! The trait defines the abstract interface for durable record storage.
//! Different implementations can provide different backends; the directory
//! repository only ever sees this interface.

use crate::error::PhoneBookResult;
use crate::record::PhoneBookRecord;

/// Durable storage for the full record collection
///
/// Implementations transcode the whole ordered record set to and from a
/// durable resource. They hold no record state of their own between calls
/// and apply no business rules.
pub trait RecordStorage: Send + Sync {
    /// Load the full record collection.
    ///
    /// An absent backing resource is not an error: implementations return
    /// an empty collection and the directory starts fresh.
    fn load_records(&self) -> PhoneBookResult<Vec<PhoneBookRecord>>;

    /// Persist the full record collection, replacing previous contents.
    fn save_records(&self, records: &[PhoneBookRecord]) -> PhoneBookResult<()>;
}
