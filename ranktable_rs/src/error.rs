//! Error types for the rendering pipeline.
//!
//! None of these abort rendering: every caller degrades them to a placeholder
//! or a default value and logs them.

use std::path::PathBuf;
use thiserror::Error;

/// Why a record produced no row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// The record is not an object
    #[error("record is not an object (found {kind})")]
    Malformed { kind: &'static str },

    /// Cell construction panicked
    #[error("row construction panicked: {0}")]
    Panicked(String),
}

/// Why the dataset could not be obtained.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected an object keyed by tab identifier, found {found}")]
    Shape { found: &'static str },

    #[error("transport error: {0}")]
    Transport(String),
}

/// A tab identifier outside the known set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tab identifier: {0}")]
pub struct UnknownTab(pub String);
