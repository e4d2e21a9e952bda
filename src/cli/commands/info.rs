//! Info command implementation: workspace paths and record counts.

use std::path::Path;

use watsan_lib::Tracker;

use crate::config::Workspace;
use crate::error::Result;
use crate::format::WorkspaceInfo;

/// Execute the info command.
///
/// # Errors
///
/// Returns an error if the workspace is missing.
pub fn execute(dir: Option<&Path>, json: bool) -> Result<()> {
    let workspace = Workspace::discover(dir)?;
    let tracker = Tracker::open(workspace.surveys_path(), workspace.issues_path());

    let info = WorkspaceInfo {
        root: workspace.root().to_path_buf(),
        surveys_file: workspace.surveys_path(),
        issues_file: workspace.issues_path(),
        total_surveys: tracker.survey_count(),
        total_issues: tracker.issue_count(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Workspace: {}", info.root.display());
        println!(
            "  surveys: {} ({} record(s))",
            info.surveys_file.display(),
            info.total_surveys
        );
        println!(
            "  issues:  {} ({} record(s))",
            info.issues_file.display(),
            info.total_issues
        );
    }
    Ok(())
}
