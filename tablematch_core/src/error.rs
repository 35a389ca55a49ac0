//! Error types for routes and configuration.

use std::path::PathBuf;

/// A route or route token that cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("show token `{0}` must be wrapped in `[` and `]`")]
    MissingBrackets(String),

    #[error("show token `{0}` holds no ids")]
    EmptyIds(String),

    #[error("show token `{token}` holds an invalid id `{id}`")]
    InvalidShowId { token: String, id: String },

    #[error("`{0}` is not a wrestler id")]
    InvalidWrestlerId(String),

    #[error("`{0}` is not a /shows/ or /wrestlers/ path")]
    UnknownPath(String),
}

/// Build configuration that cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
