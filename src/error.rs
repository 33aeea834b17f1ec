// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("Malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("Cannot rank an empty graph (no vertices)")]
    EmptyGraph,

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl RankError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RankError::MalformedInput {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
