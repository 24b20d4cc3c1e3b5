//! Version-control runner abstraction.
//!
//! The bump workflow drives git as a sequence of external commands whose
//! later steps depend on the working-tree and branch state left by earlier
//! ones. The [VersionControl] trait is the seam: [cli::GitCli] spawns real
//! `git` subprocesses, [mock::RecordingGit] records the command sequence for
//! tests.

pub mod cli;
pub mod mock;

pub use cli::GitCli;
pub use mock::RecordingGit;

use crate::error::Result;

/// Ordered, fallible execution of version-control commands.
///
/// Each call runs a single command to completion (success or failure) before
/// returning; implementations must not overlap command executions.
pub trait VersionControl {
    /// Run one git command with the given arguments
    fn run(&self, args: &[&str]) -> Result<()>;
}
