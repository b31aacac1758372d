pub mod console;
pub mod error;
pub mod logger;
pub mod record;
pub mod repository;

pub use console::ConsoleUi;
pub use error::{PhoneBookError, PhoneBookResult};
pub use record::{PhoneBookRecord, SearchField};
pub use repository::{JsonFileStorage, PhoneBookDirectory, RecordStorage};
