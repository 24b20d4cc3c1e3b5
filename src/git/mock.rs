use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{BumpError, Result};
use crate::git::VersionControl;

/// Mock runner for testing the workflow without spawning git.
///
/// Records every command in call order and can be told to fail a specific
/// occurrence of a subcommand (1-based), which is how the tolerated and
/// fatal failure paths are exercised.
pub struct RecordingGit {
    calls: RefCell<Vec<Vec<String>>>,
    failures: Vec<(String, usize)>,
    seen: RefCell<HashMap<String, usize>>,
}

impl RecordingGit {
    /// Create a mock that succeeds on every command
    pub fn new() -> Self {
        RecordingGit {
            calls: RefCell::new(Vec::new()),
            failures: Vec::new(),
            seen: RefCell::new(HashMap::new()),
        }
    }

    /// Fail the nth occurrence of a subcommand (1-based)
    pub fn fail_on(mut self, subcommand: &str, occurrence: usize) -> Self {
        self.failures.push((subcommand.to_string(), occurrence));
        self
    }

    /// All recorded commands, in call order
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Recorded commands as joined strings, for sequence assertions
    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|args| args.join(" "))
            .collect()
    }
}

impl Default for RecordingGit {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for RecordingGit {
    fn run(&self, args: &[&str]) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(args.iter().map(|a| a.to_string()).collect());

        let subcommand = args.first().copied().unwrap_or("");
        let mut seen = self.seen.borrow_mut();
        let count = seen.entry(subcommand.to_string()).or_insert(0);
        *count += 1;

        if self
            .failures
            .iter()
            .any(|(sub, occurrence)| sub == subcommand && *occurrence == *count)
        {
            return Err(BumpError::git(format!(
                "simulated failure: git {}",
                subcommand
            )));
        }

        Ok(())
    }
}
