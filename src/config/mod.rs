//! Workspace configuration for `wsn`.
//!
//! Resolution order for the data directory: `--dir` flag, `WATSAN_DIR`
//! environment variable (both arrive through clap), then `./.watsan`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WatsanError};

/// Default workspace directory name.
pub const WORKSPACE_DIR: &str = ".watsan";
/// Backing file for the surveys collection.
pub const SURVEYS_FILE: &str = "surveys.json";
/// Backing file for the issues collection.
pub const ISSUES_FILE: &str = "issues.json";

/// A resolved workspace: the directory owning both backing files.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Resolve the workspace root from an optional override directory.
    #[must_use]
    pub fn resolve(dir: Option<&Path>) -> PathBuf {
        dir.map_or_else(|| PathBuf::from(WORKSPACE_DIR), Path::to_path_buf)
    }

    /// Create the workspace directory and seed empty backing files.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInitialized` if the directory exists and `force`
    /// is not set, or `Io` if it cannot be created or seeded.
    pub fn init(dir: Option<&Path>, force: bool) -> Result<Self> {
        let root = Self::resolve(dir);

        if root.exists() && !force {
            return Err(WatsanError::AlreadyInitialized { path: root });
        }
        fs::create_dir_all(&root)?;

        let workspace = Self { root };
        for path in [workspace.surveys_path(), workspace.issues_path()] {
            if !path.exists() || force {
                fs::write(&path, "[]\n")?;
            }
        }
        Ok(workspace)
    }

    /// Locate an existing workspace.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if the directory does not exist.
    pub fn discover(dir: Option<&Path>) -> Result<Self> {
        let root = Self::resolve(dir);
        if !root.is_dir() {
            return Err(WatsanError::NotInitialized);
        }
        Ok(Self { root })
    }

    /// The workspace root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the surveys backing file.
    #[must_use]
    pub fn surveys_path(&self) -> PathBuf {
        self.root.join(SURVEYS_FILE)
    }

    /// Path of the issues backing file.
    #[must_use]
    pub fn issues_path(&self) -> PathBuf {
        self.root.join(ISSUES_FILE)
    }
}
