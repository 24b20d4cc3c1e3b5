use std::path::PathBuf;
use std::process::Command;

use crate::error::{BumpError, Result};
use crate::git::VersionControl;

/// Runs git commands as child processes in the workspace directory
pub struct GitCli {
    workspace: PathBuf,
}

impl GitCli {
    /// Create a runner rooted at the given workspace
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        GitCli {
            workspace: workspace.into(),
        }
    }
}

impl VersionControl for GitCli {
    fn run(&self, args: &[&str]) -> Result<()> {
        let subcommand = args.first().copied().unwrap_or("");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workspace)
            .output()
            .map_err(|e| BumpError::git(format!("failed to run git {}: {}", subcommand, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // Only the subcommand is reported; full arguments can carry the
            // token-authenticated remote URL
            return Err(BumpError::git(format!(
                "git {} exited with code {}: {}",
                subcommand,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(())
    }
}
