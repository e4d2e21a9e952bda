//! Error types for the `wsn` CLI layer.
//!
//! Store and service failures come from `watsan-lib` and are wrapped
//! transparently; this enum adds the workspace and setup failures only
//! the binary can hit.

use std::path::PathBuf;
use thiserror::Error;

/// CLI-layer error type.
#[derive(Error, Debug)]
pub enum WatsanError {
    /// No workspace directory where one was expected.
    #[error("Workspace not initialized (run `wsn init` first)")]
    NotInitialized,

    /// `init` found an existing workspace and `--force` was not given.
    #[error("Workspace already initialized: {path}")]
    AlreadyInitialized { path: PathBuf },

    /// Library-level failure (validation, not-found, I/O).
    #[error(transparent)]
    Lib(#[from] watsan_lib::WatsanError),

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using the CLI-layer `WatsanError`.
pub type Result<T> = std::result::Result<T, WatsanError>;
