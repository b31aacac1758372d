use phonebook::{ConsoleUi, JsonFileStorage, PhoneBookDirectory};
use std::path::PathBuf;

/// Records shown per page in the listing view
const RECORDS_PER_PAGE: usize = 20;

/// Default database file, next to the working directory
const DEFAULT_DB_PATH: &str = "phonebook-db.json";

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

    let storage = JsonFileStorage::new(path);
    let directory = match PhoneBookDirectory::open(Box::new(storage)) {
        Ok(directory) => directory,
        Err(e) => {
            eprintln!("Failed to open the phone book: {}", e);
            std::process::exit(1);
        }
    };

    ConsoleUi::new(directory, RECORDS_PER_PAGE).run();
}
