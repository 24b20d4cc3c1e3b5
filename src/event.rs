//! Event payload reader.
//!
//! The triggering event supplies the commit batch as JSON with a `commits`
//! array. Payloads without commits (manual dispatch, tag pushes) yield an
//! empty batch, not an error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{BumpError, Result};
use crate::ui;

#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default)]
    commits: Vec<CommitEntry>,
}

/// One commit entry from the event payload
#[derive(Debug, Deserialize)]
struct CommitEntry {
    #[serde(default)]
    message: String,
    #[serde(default)]
    body: Option<String>,
}

impl CommitEntry {
    /// Message and body concatenated, the unit the classifier and guard see
    fn full_message(self) -> String {
        match self.body {
            Some(body) if !body.is_empty() => format!("{}\n{}", self.message, body),
            _ => self.message,
        }
    }
}

/// Load the ordered commit batch from the event payload.
///
/// Order is preserved as given by the event (chronological). A missing path
/// means no event is available and the batch is empty; a present but
/// unreadable or unparseable payload is an error.
pub fn commit_messages(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        ui::display_status("Couldn't find any commits in this event");
        return Ok(Vec::new());
    };

    let raw = fs::read_to_string(path).map_err(|e| {
        BumpError::event(format!("cannot read event payload {}: {}", path.display(), e))
    })?;
    let payload: EventPayload = serde_json::from_str(&raw).map_err(|e| {
        BumpError::event(format!("cannot parse event payload {}: {}", path.display(), e))
    })?;

    if payload.commits.is_empty() {
        ui::display_status("Couldn't find any commits in this event");
    }

    Ok(payload
        .commits
        .into_iter()
        .map(CommitEntry::full_message)
        .collect())
}
