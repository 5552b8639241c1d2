use std::path::PathBuf;

/// Errors raised while loading samples into a store.
///
/// Queries never fail; only ingestion of external data can.
///
/// # Examples
///
/// ```rust
/// use vitalwatch_storage::error::StorageError;
///
/// let err = StorageError::InvalidRow {
///     line: 3,
///     reason: "bad timestamp".to_string(),
/// };
/// assert!(err.to_string().contains("line 3"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The input file could not be opened or read.
    #[error("Storage: I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input path exists but is not a regular file.
    #[error("Storage: not a file: {0}")]
    NotAFile(PathBuf),

    /// The CSV header lacks a required column.
    #[error("Storage: missing column '{0}' in header")]
    MissingColumn(&'static str),

    /// A data row could not be parsed.
    #[error("Storage: invalid row at line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },
}

/// Convenience `Result` alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
