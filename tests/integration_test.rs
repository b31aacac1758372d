use phonebook::{JsonFileStorage, PhoneBookDirectory, PhoneBookRecord, RecordStorage};
use std::collections::HashMap;
use tempfile::TempDir;

fn record(id: u64, last_name: &str, first_name: &str, organization: &str) -> PhoneBookRecord {
    PhoneBookRecord {
        id,
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        middle_name: String::new(),
        organization: organization.to_string(),
        work_phone: "+7 495 123-45-67".to_string(),
        personal_phone: "+7 912 765-43-21".to_string(),
    }
}

/// Test the complete workflow: open empty, add, edit, search, page, reopen
#[test]
fn test_complete_phone_book_workflow() {
    // Setup: point the database at a fresh temporary directory
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("phonebook-db.json");

    // Step 1: Opening against a missing file yields an empty directory
    let storage = JsonFileStorage::new(db_path.clone());
    let mut directory = PhoneBookDirectory::open(Box::new(storage)).unwrap();
    assert!(directory.is_empty());
    assert_eq!(directory.next_id(), 1);

    // Step 2: Add records the way the console adapter does
    for (last_name, first_name, organization) in [
        ("Иванов", "Пётр", "ООО «Ромашка»"),
        ("Petrova", "Anna", "Acme"),
        ("Sidorov", "Ivan", "Acme"),
    ] {
        let id = directory.next_id();
        directory
            .add(record(id, last_name, first_name, organization))
            .unwrap();
    }
    assert_eq!(directory.len(), 3);
    assert_eq!(directory.next_id(), 4);

    // Step 3: Edit the second record in place
    let mut edited = directory.records()[1].clone();
    edited.organization = "Beta".to_string();
    directory.update(1, edited).unwrap();

    // Step 4: Search with AND semantics across fields
    let mut criteria = HashMap::new();
    criteria.insert("organization".to_string(), "acme".to_string());
    criteria.insert("last_name".to_string(), "sido".to_string());
    let found = directory.search(&criteria).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].last_name, "Sidorov");

    // Step 5: Page through the collection
    assert_eq!(directory.page(1, 2).len(), 2);
    assert_eq!(directory.page(2, 2).len(), 1);
    assert!(directory.page(3, 2).is_empty());

    // Step 6: A fresh directory over the same file sees identical state
    let reopened_storage = JsonFileStorage::new(db_path.clone());
    let reopened = PhoneBookDirectory::open(Box::new(reopened_storage)).unwrap();
    assert_eq!(reopened.records(), directory.records());
    assert_eq!(reopened.records()[0].last_name, "Иванов");
    assert_eq!(reopened.records()[1].organization, "Beta");

    // Step 7: The durable bytes keep Unicode text literal
    let raw = std::fs::read_to_string(&db_path).unwrap();
    assert!(raw.contains("ООО «Ромашка»"));

    // Step 8: Storage alone round-trips the exact collection
    let storage = JsonFileStorage::new(db_path);
    let loaded = storage.load_records().unwrap();
    assert_eq!(loaded, directory.records());
}
