//! Survey commands: add and remove.

use std::path::Path;

use watsan_lib::SurveySubmission;

use crate::error::Result;
use crate::format::{Confirmation, format_survey_line};

/// Execute `survey add`.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the name is empty.
pub fn add(
    dir: Option<&Path>,
    name: String,
    usage: i64,
    timestamp: Option<String>,
    json: bool,
) -> Result<()> {
    let mut tracker = super::open_tracker(dir)?;
    let record = tracker.submit_survey(SurveySubmission {
        name,
        usage,
        timestamp,
    })?;

    if json {
        let confirmation = Confirmation::new("Survey submitted successfully", record);
        println!("{}", serde_json::to_string_pretty(&confirmation)?);
    } else {
        println!("Submitted {}", format_survey_line(&record));
    }
    Ok(())
}

/// Execute `survey remove`.
///
/// # Errors
///
/// Returns an error if the workspace is missing or no survey has the id.
pub fn remove(dir: Option<&Path>, id: u64, json: bool) -> Result<()> {
    let mut tracker = super::open_tracker(dir)?;
    let record = tracker.delete_survey(id)?;

    if json {
        let confirmation = Confirmation::new("Survey deleted successfully", record);
        println!("{}", serde_json::to_string_pretty(&confirmation)?);
    } else {
        println!("Deleted {}", format_survey_line(&record));
    }
    Ok(())
}
