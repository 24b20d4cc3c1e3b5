use thiserror::Error;

/// Unified error type for bump-action operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Malformed version: {0}")]
    Version(String),

    #[error("Invalid bump class: {0}")]
    BumpClass(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event payload error: {0}")]
    Event(String),

    #[error("Git command failed: {0}")]
    Git(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in bump-action
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::Version(msg.into())
    }

    /// Create a bump class error with context
    pub fn bump_class(msg: impl Into<String>) -> Self {
        BumpError::BumpClass(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        BumpError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create an event payload error with context
    pub fn event(msg: impl Into<String>) -> Self {
        BumpError::Event(msg.into())
    }

    /// Create a git error with context
    pub fn git(msg: impl Into<String>) -> Self {
        BumpError::Git(msg.into())
    }
}
