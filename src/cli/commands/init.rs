//! Init command implementation.

use std::path::Path;

use crate::config::Workspace;
use crate::error::Result;

/// Execute the init command.
///
/// # Errors
///
/// Returns `AlreadyInitialized` if the workspace exists and `force` is
/// not set, or an I/O error if it cannot be created.
pub fn execute(dir: Option<&Path>, force: bool) -> Result<()> {
    let workspace = Workspace::init(dir, force)?;
    println!(
        "Initialized watsan workspace in {}",
        workspace.root().display()
    );
    Ok(())
}
