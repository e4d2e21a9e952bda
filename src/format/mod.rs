//! Output formatting for `wsn`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! JSON goes to stdout; diagnostics stay on stderr.
//!
//! # JSON Output Types
//!
//! - [`Confirmation`] - `{message, data}` envelope for submit/delete
//! - [`WorkspaceInfo`] - Workspace paths and record counts (info)

mod output;
mod text;

pub use output::{Confirmation, WorkspaceInfo};
pub use text::{format_data_table, format_issue_line, format_survey_line};
