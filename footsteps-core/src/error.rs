//! Error types for the footstep core.
//!
//! Only loading and watching return errors. Registration problems are
//! described by [`RegisterError`] but are logged and skipped by the callers,
//! and resolution never fails.

use std::path::PathBuf;

/// Result alias for fallible load/watch operations
pub type Result<T> = std::result::Result<T, FootstepsError>;

/// Errors surfaced while loading configuration or watching it for changes
#[derive(Debug, thiserror::Error)]
pub enum FootstepsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Watcher error: {0}")]
    Watch(#[from] notify::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Why a single block or primitive registration was skipped
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("malformed block key '{0}'")]
    MalformedKey(String),
    #[error("unknown block '{0}'")]
    UnknownBlock(String),
    #[error("unknown macro '{0}'")]
    UnknownMacro(String),
    #[error("unknown substrate '{0}'")]
    UnknownSubstrate(String),
    #[error("block '{block}' has no property '{property}' accepting '{value}'")]
    UnknownProperty {
        block: String,
        property: String,
        value: String,
    },
}
