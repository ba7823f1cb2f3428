//! User store persistence tests

use std::fs;
use std::path::PathBuf;

use transit_cli::store::{CorruptStorePolicy, RecordRole, StoreError, UserRecord, UserStore};
use transit_cli::transit::{Person, Role};

/// Fresh path under the cargo test scratch directory
fn scratch_path(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("store_tests");
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}

fn sample_records() -> Vec<UserRecord> {
    vec![
        UserRecord::from(&Person::passenger("Alice", "Smith", 30, "alice")),
        UserRecord::from(&Person::driver("Ali", "Karimov", 35, "alikarimov", "DL12345")),
    ]
}

#[test]
fn test_missing_file_loads_empty_without_creating() {
    let path = scratch_path("missing.json");
    let store = UserStore::new(&path, CorruptStorePolicy::Fail);

    assert!(store.load().unwrap().is_empty());
    assert!(store.load().unwrap().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_save_then_load_round_trip() {
    let path = scratch_path("round_trip.json");
    let store = UserStore::new(&path, CorruptStorePolicy::Fail);
    let records = sample_records();

    store.save(&records).unwrap();
    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn test_saved_file_layout() {
    let path = scratch_path("layout.json");
    let store = UserStore::new(&path, CorruptStorePolicy::Fail);
    store.save(&sample_records()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("[\n    {\n        \"role\": \"passenger\""));
    assert!(contents.contains("\"license_number\": null"));
    assert!(contents.contains("\"license_number\": \"DL12345\""));
    assert!(contents.contains("\"role\": \"driver\""));
}

#[test]
fn test_corrupt_file_fails_by_default() {
    let path = scratch_path("corrupt_fail.json");
    fs::write(&path, "{ not json").unwrap();
    let store = UserStore::new(&path, CorruptStorePolicy::Fail);

    assert!(matches!(store.load(), Err(StoreError::Corrupt { .. })));
    assert!(store
        .append(&Person::passenger("Bob", "Jones", 40, "bob"))
        .is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_corrupt_error_reports_cause_once() {
    let path = scratch_path("corrupt_chain.json");
    fs::write(&path, "{ not json").unwrap();
    let store = UserStore::new(&path, CorruptStorePolicy::Fail);

    let err = store.load().expect_err("corrupt store should fail");
    let cause = std::error::Error::source(&err)
        .expect("corrupt error should carry its parse error")
        .to_string();
    assert!(!err.to_string().contains(&cause));

    let chain = format!("{:#}", anyhow::Error::from(err));
    assert_eq!(chain.matches(&cause).count(), 1);
}

#[test]
fn test_corrupt_file_treated_as_empty() {
    let path = scratch_path("corrupt_empty.json");
    fs::write(&path, "{ not json").unwrap();
    let store = UserStore::new(&path, CorruptStorePolicy::TreatAsEmpty);

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_find_is_exact_and_read_only() {
    let path = scratch_path("find.json");
    let store = UserStore::new(&path, CorruptStorePolicy::Fail);
    store.save(&sample_records()).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let driver = store.find("alikarimov").unwrap().expect("driver should be found");
    assert_eq!(
        driver.role,
        Role::Driver {
            license_number: "DL12345".to_string()
        }
    );
    assert!(store.find("Alice").unwrap().is_none());
    assert!(store.contains("alice").unwrap());
    assert!(!store.contains("ALICE").unwrap());

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_append_keeps_existing_records() {
    let path = scratch_path("append.json");
    let store = UserStore::new(&path, CorruptStorePolicy::Fail);

    store.append(&Person::passenger("Alice", "Smith", 30, "alice")).unwrap();
    store.append(&Person::driver("Ali", "Karimov", 35, "ali", "DL1")).unwrap();

    let records = store.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].username, "alice");
    assert_eq!(records[1].role, RecordRole::Driver);
}

#[test]
fn test_driver_record_without_license() {
    let record: UserRecord = serde_json::from_str(
        r#"{"role": "driver", "first_name": "A", "last_name": "B", "age": 40, "username": "ab"}"#,
    )
    .unwrap();
    let person = Person::from(record);
    assert_eq!(person.license_number(), Some(""));
}
