use chrono::{Duration, TimeZone, Utc};
use roster::clock::ManualClock;
use roster::counter::CounterCell;
use roster::model::{Gender, StudentDraft};
use roster::records::RecordStore;
use roster::store::fs::FileBackend;
use roster::store::gateway::StorageGateway;
use roster::store::{COUNTER_KEY, STUDENTS_KEY, StorageBackend};
use std::fs;
use tempfile::TempDir;

fn open(dir: &TempDir) -> RecordStore<FileBackend, ManualClock> {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap());
    RecordStore::open(
        StorageGateway::new(FileBackend::new(dir.path())),
        clock,
        Duration::milliseconds(3000),
    )
}

#[test]
fn records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = open(&dir);
        store
            .add(&StudentDraft::new("Jane Doe", "jane@x.com", "9876543210", Gender::Female))
            .unwrap();
        store
            .add(&StudentDraft::new("John Roe", "john@x.com", "1234567890", Gender::Male))
            .unwrap();
    }

    let store = open(&dir);
    let names: Vec<_> = store.list().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Jane Doe", "John Roe"]);
    assert!(store.list()[0].id < store.list()[1].id);
}

#[test]
fn stored_collection_is_a_json_array() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store
        .add(&StudentDraft::new("Jane Doe", "jane@x.com", "9876543210", Gender::Female))
        .unwrap();

    let raw = fs::read_to_string(dir.path().join(STUDENTS_KEY)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert_eq!(first["name"], "Jane Doe");
    assert_eq!(first["gender"], "Female");
    assert!(first["id"].is_i64());
}

#[test]
fn corrupt_collection_loads_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(STUDENTS_KEY), "{not json").unwrap();
    assert!(open(&dir).is_empty());
}

#[test]
fn counter_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut cell = CounterCell::open(StorageGateway::new(FileBackend::new(dir.path())));
        cell.increment();
        cell.increment();
        cell.increment();
        cell.decrement();
    }

    let backend = FileBackend::new(dir.path());
    assert_eq!(backend.read(COUNTER_KEY).unwrap().as_deref(), Some("2"));
    let cell = CounterCell::open(StorageGateway::new(backend));
    assert_eq!(cell.value(), 2);
}

#[test]
fn garbage_counter_reads_as_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(COUNTER_KEY), "-4").unwrap();
    let cell = CounterCell::open(StorageGateway::new(FileBackend::new(dir.path())));
    assert_eq!(cell.value(), 0);
}
