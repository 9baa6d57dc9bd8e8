//! Error types.
//!
//! Building a table never fails. These errors come from loading table
//! specs and from strict column validation.

use std::path::PathBuf;

/// Error returned by spec loading and strict validation.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A column has neither `key` nor `dataIndex`.
    #[error("Column at position {position} has neither `key` nor `dataIndex`")]
    MissingColumnKey { position: usize },

    /// Two sibling columns share a key.
    #[error("Duplicate column key '{key}'")]
    DuplicateColumnKey { key: String },

    /// The table spec file could not be read.
    #[error("Failed to read table spec {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table spec is not valid JSON.
    #[error("Invalid table spec: {0}")]
    Json(#[from] serde_json::Error),
}
