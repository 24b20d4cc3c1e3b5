use regex::{Regex, RegexBuilder};

use crate::error::{BumpError, Result};
use crate::ui;

/// Governs which commit messages the bump-loop guard inspects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpPolicy {
    /// Any message in the batch may be a prior bump
    All,
    /// Only the last message in the batch is inspected
    LastCommit,
    /// Guard disabled
    Ignore,
    /// Unrecognized value carried through from configuration; the guard is
    /// disabled and the operator warned
    Unknown(String),
}

impl BumpPolicy {
    /// Map a configured policy string to a policy; never fails
    pub fn parse(s: &str) -> Self {
        match s {
            "all" => BumpPolicy::All,
            "last-commit" => BumpPolicy::LastCommit,
            "ignore" => BumpPolicy::Ignore,
            other => BumpPolicy::Unknown(other.to_string()),
        }
    }
}

/// Decide whether the commit batch already contains a bump commit.
///
/// A prior bump is detected by rendering the commit message template into a
/// pattern: literal parts are matched verbatim and the version placeholder
/// matches `<tagPrefix><digits>.<digits>.<digits>`, case-insensitively.
/// Returning true means the run must stop without action so that bump
/// commits cannot trigger further bumps.
pub fn already_bumped(
    messages: &[String],
    template: &str,
    tag_prefix: &str,
    policy: &BumpPolicy,
) -> Result<bool> {
    match policy {
        BumpPolicy::All => {
            let pattern = detection_pattern(template, tag_prefix)?;
            Ok(messages.iter().any(|m| pattern.is_match(m)))
        }
        BumpPolicy::LastCommit => {
            let pattern = detection_pattern(template, tag_prefix)?;
            Ok(messages.last().is_some_and(|m| pattern.is_match(m)))
        }
        BumpPolicy::Ignore => {
            ui::display_status("Ignoring any version bumps in commits...");
            Ok(false)
        }
        BumpPolicy::Unknown(value) => {
            ui::display_warning(&format!("Unknown bump policy: {}", value));
            Ok(false)
        }
    }
}

/// Build the prior-bump detection regex from a commit message template.
///
/// The template is escaped so its literal parts cannot act as pattern
/// syntax; the escaped `{{version}}` placeholder is then substituted with
/// the version-matching pattern.
pub fn detection_pattern(template: &str, tag_prefix: &str) -> Result<Regex> {
    let escaped = regex::escape(template);
    let version_pattern = format!(r"{}\d+\.\d+\.\d+", regex::escape(tag_prefix));
    let pattern = escaped.replace(r"\{\{version\}\}", &version_pattern);

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| BumpError::config(format!("invalid commit message template: {}", e)))
}
