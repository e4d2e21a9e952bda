use std::path::PathBuf;

use serde::Serialize;

/// JSON envelope for mutations: a human message plus the created or
/// deleted record.
#[derive(Debug, Clone, Serialize)]
pub struct Confirmation<T> {
    pub message: String,
    pub data: T,
}

impl<T> Confirmation<T> {
    #[must_use]
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Workspace paths and record counts for the info view.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceInfo {
    pub root: PathBuf,
    pub surveys_file: PathBuf,
    pub issues_file: PathBuf,
    pub total_surveys: usize,
    pub total_issues: usize,
}
