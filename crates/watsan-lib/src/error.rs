//! Error types for `watsan-lib`.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::RecordId;

/// Primary error type for watsan-lib operations.
#[derive(Error, Debug)]
pub enum WatsanError {
    // === Validation Errors ===
    /// A required field was absent or empty after trimming.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    // === Lookup Errors ===
    /// No record with the given id exists in the collection.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: RecordId },

    // === Storage Errors ===
    /// Backing file not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using `WatsanError`.
pub type Result<T> = std::result::Result<T, WatsanError>;
