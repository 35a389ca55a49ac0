//! Errors surfaced by the command line.

use std::path::PathBuf;

use show_records::RecordError;
use tablematch_core::{ConfigError, RouteError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("unknown log level `{0}`")]
    LogLevel(String),

    #[error("cannot install log subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialise page data: {0}")]
    Json(#[from] serde_json::Error),
}
