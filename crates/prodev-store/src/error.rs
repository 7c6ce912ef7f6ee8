//! Store error types.

/// Errors produced by the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// SQLite-level failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Filesystem failure (CSV file, database directory).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV file is structurally unusable (bad header, unclosed quote).
    #[error("malformed CSV: {0}")]
    Csv(String),
}

/// Convenience alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;
