//! Version command implementation.

use crate::error::Result;

/// Execute the version command.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({
            "name": "wsn",
            "version": env!("CARGO_PKG_VERSION"),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("wsn {}", env!("CARGO_PKG_VERSION"));
    }
    Ok(())
}
