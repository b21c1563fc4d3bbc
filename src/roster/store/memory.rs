use super::StorageBackend;
use crate::error::StorageError;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory storage for testing. Does NOT persist data.
///
/// Uses a `Mutex` rather than `RefCell` because the counter persists from a
/// background thread.
#[derive(Debug, Default)]
pub struct MemBackend {
    entries: Mutex<HashMap<String, String>>,
    simulate_write_error: AtomicBool,
    writes: AtomicUsize,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the write path (e.g. to plant corrupt data).
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.lock().insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(StorageError::WriteRejected {
                key: key.to_string(),
            });
        }
        self.lock().insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::clock::ManualClock;
    use crate::model::{Gender, StudentRecord};
    use crate::records::RecordStore;
    use crate::store::STUDENTS_KEY;
    use crate::store::gateway::StorageGateway;
    use chrono::{Duration, TimeZone, Utc};

    pub type TestStore = RecordStore<MemBackend, ManualClock>;

    /// Record store over `backend` with a clock frozen at 2024-09-01 08:00 UTC.
    pub fn open_store(backend: MemBackend) -> TestStore {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap());
        RecordStore::open(
            StorageGateway::new(backend),
            clock,
            Duration::milliseconds(3000),
        )
    }

    pub fn student(id: i64, name: &str) -> StudentRecord {
        let slug = name.to_lowercase().replace(' ', ".");
        StudentRecord {
            id,
            name: name.to_string(),
            email: format!("{}@school.edu", slug),
            phone: format!("{:010}", id.rem_euclid(10_000_000_000)),
            gender: Gender::Male,
        }
    }

    /// Backend pre-populated with a students collection.
    pub fn backend_with_students(names: &[&str]) -> MemBackend {
        let records: Vec<StudentRecord> = names
            .iter()
            .enumerate()
            .map(|(i, name)| student(1_000 + i as i64, name))
            .collect();
        let json = serde_json::to_string(&records).unwrap();
        MemBackend::new().with_entry(STUDENTS_KEY, &json)
    }
}
