use super::StorageBackend;
use crate::error::StorageError;
use crate::model::{StudentDraft, StudentRecord};
use crate::validation::validate;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// Typed access to the backend: student collections and the counter scalar.
///
/// Loads never fail. Anything missing, unreadable or malformed comes back as
/// an empty collection or zero.
pub struct StorageGateway<B: StorageBackend> {
    backend: Arc<B>,
}

impl<B: StorageBackend> Clone for StorageGateway<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: StorageBackend> StorageGateway<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn from_shared(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self, key: &str) -> PathBuf {
        self.backend.location(key)
    }

    pub fn load_records(&self, key: &str) -> Vec<StudentRecord> {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::warn!("event=storage_load key={} status=read_failed error={}", key, err);
                return Vec::new();
            }
        };

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                log::warn!("event=storage_load key={} status=not_an_array", key);
                return Vec::new();
            }
            Err(err) => {
                log::warn!("event=storage_load key={} status=parse_failed error={}", key, err);
                return Vec::new();
            }
        };

        let total = items.len();
        let records: Vec<StudentRecord> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<StudentRecord>(item).ok())
            .filter(|record| validate(&StudentDraft::from(record)).is_empty())
            .collect();

        if records.len() != total {
            log::warn!(
                "event=storage_load key={} status=skipped_entries skipped={}",
                key,
                total - records.len()
            );
        }
        records
    }

    pub fn save_records(&self, key: &str, records: &[StudentRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_string(records).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.backend.write(key, &json)
    }

    pub fn load_counter(&self, key: &str) -> u64 {
        match self.backend.read(key) {
            Ok(Some(raw)) => parse_counter(&raw),
            Ok(None) => 0,
            Err(err) => {
                log::warn!("event=storage_load key={} status=read_failed error={}", key, err);
                0
            }
        }
    }

    pub fn save_counter(&self, key: &str, value: u64) -> Result<(), StorageError> {
        self.backend.write(key, &value.to_string())
    }
}

/// Reads a leading integer the way a lenient form field would: surrounding
/// whitespace is ignored, trailing junk is ignored, negatives and garbage are 0.
pub fn parse_counter(raw: &str) -> u64 {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::STUDENTS_KEY;
    use crate::store::memory::MemBackend;
    use crate::store::memory::fixtures::student;

    #[test]
    fn round_trips_a_collection() {
        let gateway = StorageGateway::new(MemBackend::new());
        let records = vec![student(1, "John Smith"), student(2, "Amy Lee")];
        gateway.save_records(STUDENTS_KEY, &records).unwrap();
        assert_eq!(gateway.load_records(STUDENTS_KEY), records);
    }

    #[test]
    fn missing_key_loads_empty() {
        let gateway = StorageGateway::new(MemBackend::new());
        assert!(gateway.load_records(STUDENTS_KEY).is_empty());
        assert_eq!(gateway.load_counter("counter"), 0);
    }

    #[test]
    fn corrupt_value_loads_empty() {
        let backend = MemBackend::new().with_entry(STUDENTS_KEY, "{not json");
        let gateway = StorageGateway::new(backend);
        assert!(gateway.load_records(STUDENTS_KEY).is_empty());
    }

    #[test]
    fn non_array_value_loads_empty() {
        let backend = MemBackend::new().with_entry(STUDENTS_KEY, r#"{"id":1}"#);
        let gateway = StorageGateway::new(backend);
        assert!(gateway.load_records(STUDENTS_KEY).is_empty());
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let raw = r#"[
            {"id":1,"name":"Ok","email":"ok@x.io","phone":"1234567890","gender":"Female"},
            {"id":2,"name":"","email":"bad@x.io","phone":"1234567890"},
            "not a record"
        ]"#;
        let gateway = StorageGateway::new(MemBackend::new().with_entry(STUDENTS_KEY, raw));
        let loaded = gateway.load_records(STUDENTS_KEY);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Ok");
    }

    #[test]
    fn save_failure_is_reported() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let gateway = StorageGateway::new(backend);
        assert!(gateway.save_records(STUDENTS_KEY, &[]).is_err());
        assert!(gateway.save_counter("counter", 3).is_err());
    }

    #[test]
    fn counter_parsing_is_lenient() {
        assert_eq!(parse_counter("12"), 12);
        assert_eq!(parse_counter(" 7 \n"), 7);
        assert_eq!(parse_counter("12abc"), 12);
        assert_eq!(parse_counter("-3"), 0);
        assert_eq!(parse_counter("NaN"), 0);
        assert_eq!(parse_counter(""), 0);
        assert_eq!(parse_counter("99999999999999999999999"), 0);
    }
}
