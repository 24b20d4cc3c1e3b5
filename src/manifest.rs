//! Manifest store.
//!
//! The manifest is the durable state this tool mutates: a JSON object whose
//! `version` field holds the project version. Everything else in the
//! document is preserved untouched, and output keeps the conventional tab
//! indentation of the ecosystem the manifest belongs to.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::error::{BumpError, Result};

/// A loaded manifest document bound to its file path
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Value,
}

impl Manifest {
    /// Load the manifest from disk.
    ///
    /// A missing file aborts the run before any mutation; a present file
    /// must parse as a JSON object.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            return Err(BumpError::manifest(format!(
                "'{}' could not be found in the project root",
                path.display()
            )));
        }

        let raw = fs::read_to_string(&path)?;
        let document: Value = serde_json::from_str(&raw)?;

        if !document.is_object() {
            return Err(BumpError::manifest(format!(
                "'{}' is not a JSON object",
                path.display()
            )));
        }

        Ok(Manifest { path, document })
    }

    /// Current version string, trimmed; empty when the field is absent
    pub fn version(&self) -> String {
        self.document
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string()
    }

    /// Set the version field
    pub fn set_version(&mut self, version: &str) {
        if let Some(object) = self.document.as_object_mut() {
            object.insert("version".to_string(), Value::String(version.to_string()));
        }
    }

    /// Write the document back to its file, tab-indented
    pub fn save(&self) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"\t");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.document.serialize(&mut serializer)?;
        fs::write(&self.path, buf)?;
        Ok(())
    }
}
