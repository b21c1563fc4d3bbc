use super::StorageBackend;
use crate::error::StorageError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

/// File-per-key storage rooted at the data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn ensure_dir(&self, key: &str) -> Result<(), StorageError> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|source| io_error(key, source))?;
        }
        Ok(())
    }
}

fn io_error(key: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.location(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(key, err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_dir(key)?;

        let target = self.location(key);
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(|source| io_error(key, source))?;
        if let Err(source) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(io_error(key, source));
        }

        log::debug!(
            "event=storage_write key={} bytes={} path={}",
            key,
            value.len(),
            target.display()
        );
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}
