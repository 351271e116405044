use crate::short_id::ShortId;
use thiserror::Error;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid identifier: {0}")]
    InvalidId(String),
    #[error("no url stored for identifier {0}")]
    NotFound(ShortId),
    #[error("log i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt log record at line {line}: {reason}")]
    CorruptLog { line: usize, reason: String },
}

impl StorageError {
    /// Whether the error is an expected per-request condition (a bad
    /// lookup key) rather than a storage fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidId(_) | Self::NotFound(_))
    }
}
