//! Record storage and the directory repository
//!
//! This module owns everything between the console adapter and the bytes on
//! disk: an abstract storage trait, the JSON file backend, and the directory
//! repository that holds the live record set.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            PhoneBookDirectory            │
//! │  (owns the in-memory record collection)  │
//! └──────────────────┬───────────────────────┘
//!                    │ load / save full set
//! ┌──────────────────▼───────────────────────┐
//! │           RecordStorage trait            │
//! └──────────────────┬───────────────────────┘
//!                    │
//!           ┌────────▼────────┐
//!           │ JsonFileStorage │
//!           │ - JSON array    │
//!           │ - atomic rename │
//!           └─────────────────┘
//! ```

pub mod directory;
pub mod file;
pub mod traits;

// Re-export main types
pub use directory::PhoneBookDirectory;
pub use file::JsonFileStorage;
pub use traits::RecordStorage;
