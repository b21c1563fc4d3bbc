use crate::validation::FieldErrors;
use thiserror::Error;

/// Failure to write to (or read from) the durable key-value storage.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O failed for `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage rejected write for `{key}`")]
    WriteRejected { key: String },

    #[error("storage writer is no longer running")]
    WriterGone,
}

/// Failure of the remote directory request.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("could not decode directory response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid directory url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("directory worker stopped before replying")]
    WorkerGone,
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid student: {0}")]
    Validation(FieldErrors),

    #[error("Student not found: {0}")]
    StudentNotFound(i64),

    #[error("No record id left after {0}")]
    IdsExhausted(i64),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
