//! Issue commands: report and remove.

use std::path::Path;

use watsan_lib::IssueReport;

use crate::error::Result;
use crate::format::{Confirmation, format_issue_line};

/// Execute `issue report`.
///
/// # Errors
///
/// Returns an error if the workspace is missing or location/problem is
/// empty.
pub fn report(
    dir: Option<&Path>,
    location: String,
    problem: String,
    timestamp: Option<String>,
    json: bool,
) -> Result<()> {
    let mut tracker = super::open_tracker(dir)?;
    let record = tracker.submit_issue(IssueReport {
        location,
        problem,
        timestamp,
    })?;

    if json {
        let confirmation = Confirmation::new("Issue reported successfully", record);
        println!("{}", serde_json::to_string_pretty(&confirmation)?);
    } else {
        println!("Reported {}", format_issue_line(&record));
    }
    Ok(())
}

/// Execute `issue remove`.
///
/// # Errors
///
/// Returns an error if the workspace is missing or no issue has the id.
pub fn remove(dir: Option<&Path>, id: u64, json: bool) -> Result<()> {
    let mut tracker = super::open_tracker(dir)?;
    let record = tracker.delete_issue(id)?;

    if json {
        let confirmation = Confirmation::new("Issue deleted successfully", record);
        println!("{}", serde_json::to_string_pretty(&confirmation)?);
    } else {
        println!("Deleted {}", format_issue_line(&record));
    }
    Ok(())
}
