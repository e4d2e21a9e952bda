//! Command implementations, one module per command.

pub mod data;
pub mod info;
pub mod init;
pub mod issue;
pub mod survey;
pub mod version;

use std::path::Path;

use watsan_lib::Tracker;

use crate::config::Workspace;
use crate::error::Result;

/// Discover the workspace and open both stores.
pub(crate) fn open_tracker(dir: Option<&Path>) -> Result<Tracker> {
    let workspace = Workspace::discover(dir)?;
    Ok(Tracker::open(
        workspace.surveys_path(),
        workspace.issues_path(),
    ))
}
