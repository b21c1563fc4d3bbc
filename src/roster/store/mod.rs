//! # Storage Layer
//!
//! Durable storage is a flat string-keyed map. Two keys are used:
//!
//! - [`STUDENTS_KEY`]: the JSON-encoded student collection
//! - [`COUNTER_KEY`]: the counter as a decimal string
//!
//! The [`StorageBackend`] trait is the "how" (files vs memory). The
//! [`gateway::StorageGateway`] is the "what": it knows the value formats and
//! degrades absent or corrupt data to empty values instead of failing.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: one file per key inside the data directory,
//!   written atomically (temp file + rename).
//! - [`memory::MemBackend`]: in-memory map for tests, with write-failure
//!   simulation.
//!
//! ## Storage Format
//!
//! ```text
//! <data-dir>/
//! ├── students        # JSON array of student records
//! ├── counter         # decimal string, e.g. "12"
//! ├── config.json     # RosterConfig
//! └── logs/           # rotating log files
//! ```

use crate::error::StorageError;
use std::path::PathBuf;

pub mod fs;
pub mod gateway;
pub mod memory;

pub const STUDENTS_KEY: &str = "students";
pub const COUNTER_KEY: &str = "counter";

/// Raw key-value I/O.
///
/// All methods take `&self`; backends are shared between the record store and
/// the counter's writer thread.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value for `key`. `Ok(None)` when the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value for `key`. Must not leave a partially written value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Where the value for `key` lives. Virtual for non-file backends.
    fn location(&self, key: &str) -> PathBuf;
}

impl<B: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<B> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn location(&self, key: &str) -> PathBuf {
        (**self).location(key)
    }
}
