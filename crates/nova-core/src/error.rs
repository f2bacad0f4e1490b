//! Error types for nova-core

use std::path::PathBuf;

/// Errors surfaced while persisting or loading a release report
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Failed to serialize release report: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to decode release report from {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode release report: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
