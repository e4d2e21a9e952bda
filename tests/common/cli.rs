//! Shared helpers for e2e tests: a temp workspace and a runner for the
//! `wsn` binary.

use std::process::ExitStatus;

use tempfile::TempDir;

/// A throwaway working directory for one test. The default `./.watsan`
/// workspace lands inside it.
pub struct WsnWorkspace {
    dir: TempDir,
}

impl WsnWorkspace {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp workspace"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}

/// Captured output of one `wsn` invocation.
pub struct CmdResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CmdResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run `wsn` with the given args inside the workspace directory.
///
/// `label` names the step in panic messages when the binary cannot be
/// spawned.
pub fn run_wsn<I, S>(workspace: &WsnWorkspace, args: I, label: &str) -> CmdResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = assert_cmd::Command::cargo_bin("wsn")
        .expect("wsn binary built")
        .current_dir(workspace.path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run wsn for step '{label}': {e}"));

    CmdResult {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Run `wsn` and panic unless it exits successfully.
pub fn run_wsn_ok<I, S>(workspace: &WsnWorkspace, args: I, label: &str) -> CmdResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let result = run_wsn(workspace, args, label);
    assert!(
        result.success(),
        "step '{label}' failed\nstdout: {}\nstderr: {}",
        result.stdout,
        result.stderr
    );
    result
}
