//! Error types for loading and composing records.

use std::path::PathBuf;

/// Store-level failures. Any of these aborts the build.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The corpus path could not be read at all.
    #[error("record store unavailable at {path}: {source}")]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus document is not a JSON array of records.
    #[error("record store is not a JSON array of show records: {0}")]
    Json(#[from] serde_json::Error),

    /// The corpus directory holds no readable `.json` file.
    #[error("record store at {path} has no readable .json files")]
    NoRecords { path: PathBuf },

    /// The corpus document parsed but its top level is not an array.
    #[error("record store must be a JSON array, found {found}")]
    NotAnArray { found: &'static str },
}

/// A single raw record failed required-field or type checks.
///
/// The record is skipped; ingestion of the rest of the corpus continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid show record at `{path}`: {reason}")]
pub struct SchemaValidationError {
    /// JSON path of the offending field, e.g. `matches[2].wrestlers[0].id`.
    pub path: String,
    pub reason: String,
}

impl SchemaValidationError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Failures while composing shows from input directives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompositionError {
    #[error("a taping needs at least one part")]
    EmptyTaping,

    #[error("match {position} is out of range for a show with {len} matches")]
    MatchOutOfRange { position: usize, len: usize },

    #[error("invalid match range `{0}`, expected `start-end` with 1 <= start <= end")]
    InvalidRange(String),
}
