use std::io;

/// Errors surfaced by every [`TodoStorage`](super::TodoStorage) backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("todo with id {id} not found")]
    NotFound { id: String },
    #[error("storage I/O failure: {0}")]
    Io(#[from] io::Error),
    #[error("malformed todo row: {0}")]
    Decode(String),
    #[error("no todo id left after {}", u64::MAX)]
    IdsExhausted,
}

impl StorageError {
    pub fn not_found(id: &str) -> Self {
        StorageError::NotFound { id: id.to_string() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

impl From<csv::Error> for StorageError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return StorageError::Decode(err.to_string());
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => StorageError::Io(io_err),
            other => StorageError::Decode(format!("{:?}", other)),
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
