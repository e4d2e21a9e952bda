//! Data command implementation: the full dual-collection listing.

use std::path::Path;

use crate::error::Result;
use crate::format::format_data_table;

/// Execute the data command.
///
/// # Errors
///
/// Returns an error if the workspace is missing.
pub fn execute(dir: Option<&Path>, json: bool) -> Result<()> {
    let tracker = super::open_tracker(dir)?;
    let snapshot = tracker.list_all_data();

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", format_data_table(&snapshot));
    }
    Ok(())
}
