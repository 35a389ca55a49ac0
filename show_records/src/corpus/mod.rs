//! The Record Store - the immutable, validated corpus every derivation reads.
//!
//! A store is built once per build, either from in-memory shows or from JSON
//! on disk, and is never mutated afterwards. Components borrow it; there is no
//! global instance.

pub mod compose;
mod validate;

pub use validate::*;

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::entities::Show;
use crate::error::{RecordError, SchemaValidationError};

/// A record that was skipped during ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Where the record came from: a file name, or `[index]` within an array.
    pub source: String,
    pub path: String,
    pub reason: String,
}

impl Diagnostic {
    fn new(source: impl Into<String>, error: SchemaValidationError) -> Self {
        Self {
            source: source.into(),
            path: error.path,
            reason: error.reason,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: `{}`: {}", self.source, self.path, self.reason)
    }
}

/// The read-only corpus of shows.
///
/// Shows are held in ascending date order; shows sharing a date keep the
/// order they were loaded in. Excluded shows are dropped at construction.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    shows: Vec<Show>,
    diagnostics: Vec<Diagnostic>,
    excluded: usize,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-typed shows.
    ///
    /// Shows that break the record invariants are skipped with a diagnostic,
    /// exactly as they would be on ingest.
    pub fn from_shows(shows: impl IntoIterator<Item = Show>) -> Self {
        let mut builder = StoreBuilder::default();
        for (index, show) in shows.into_iter().enumerate() {
            let source = format!("[{index}]");
            match validate_show(&show) {
                Ok(()) => builder.accept(show),
                Err(error) => builder.reject(source, error),
            }
        }
        builder.finish()
    }

    /// Build a store from a JSON document.
    ///
    /// The document is either an array of show records or a single record.
    pub fn from_json_str(json: &str) -> Result<Self, RecordError> {
        let value: Value = serde_json::from_str(json)?;
        let mut builder = StoreBuilder::default();
        match value {
            Value::Array(records) => {
                for (index, record) in records.iter().enumerate() {
                    builder.ingest(format!("[{index}]"), record);
                }
            }
            record @ Value::Object(_) => builder.ingest("[0]", &record),
            Value::Null => return Err(RecordError::NotAnArray { found: "null" }),
            Value::Bool(_) => return Err(RecordError::NotAnArray { found: "a boolean" }),
            Value::Number(_) => return Err(RecordError::NotAnArray { found: "a number" }),
            Value::String(_) => return Err(RecordError::NotAnArray { found: "a string" }),
        }
        Ok(builder.finish())
    }

    /// Load a store from disk.
    ///
    /// `path` is either a JSON file (see [`RecordStore::from_json_str`]) or a
    /// directory of `.json` files holding one show each, read in file-name
    /// order. A directory file that cannot be read or parsed is skipped with
    /// a diagnostic. A path that cannot be read at all, or a directory with
    /// no readable `.json` file, is fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let path = path.as_ref();
        let unavailable = |source| RecordError::StoreUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(path).map_err(unavailable)?;
        let store = if metadata.is_dir() {
            Self::load_dir(path)?
        } else {
            let json = fs::read_to_string(path).map_err(unavailable)?;
            Self::from_json_str(&json)?
        };

        info!(
            path = %path.display(),
            shows = store.len(),
            skipped = store.diagnostics.len(),
            excluded = store.excluded,
            "loaded record store"
        );
        Ok(store)
    }

    /// A directory with no readable `.json` file is fatal; individual
    /// unreadable entries and files are diagnostics.
    fn load_dir(dir: &Path) -> Result<Self, RecordError> {
        let entries = fs::read_dir(dir).map_err(|source| RecordError::StoreUnavailable {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut builder = StoreBuilder::default();
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                        files.push(path);
                    }
                }
                Err(e) => builder.reject(
                    dir.display().to_string(),
                    SchemaValidationError::new("<entry>", format!("unreadable directory entry: {e}")),
                ),
            }
        }
        files.sort();

        let mut readable = 0;
        for file in files {
            let source = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            debug!(file = %source, "reading show record");

            let text = match fs::read_to_string(&file) {
                Ok(text) => text,
                Err(e) => {
                    builder.reject(source, SchemaValidationError::new("<file>", format!("unreadable: {e}")));
                    continue;
                }
            };
            readable += 1;

            match serde_json::from_str::<Value>(&text) {
                Ok(record) => builder.ingest(source, &record),
                Err(e) => builder.reject(
                    source,
                    SchemaValidationError::new("<record>", format!("not valid JSON: {e}")),
                ),
            }
        }

        if readable == 0 {
            warn!(path = %dir.display(), "record directory has no readable .json files");
            return Err(RecordError::NoRecords {
                path: dir.to_path_buf(),
            });
        }
        Ok(builder.finish())
    }

    /// Every non-excluded show, ascending by date.
    pub fn all_shows(&self) -> &[Show] {
        &self.shows
    }

    /// Records skipped during ingest.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of valid records dropped because they were marked `exclude`.
    pub fn excluded_count(&self) -> usize {
        self.excluded
    }

    /// Get the show whose id sequence is exactly `ids`.
    pub fn show_by_ids(&self, ids: &[String]) -> Option<&Show> {
        self.shows.iter().find(|show| show.ids == ids)
    }

    /// Get the number of shows in the store.
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Check if the store holds no shows.
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}

#[derive(Default)]
struct StoreBuilder {
    shows: Vec<Show>,
    diagnostics: Vec<Diagnostic>,
    excluded: usize,
}

impl StoreBuilder {
    fn ingest(&mut self, source: impl Into<String>, record: &Value) {
        match validate_record(record) {
            Ok(show) => self.accept(show),
            Err(error) => self.reject(source, error),
        }
    }

    fn accept(&mut self, show: Show) {
        if show.exclude {
            debug!(ids = ?show.ids, "dropping excluded show");
            self.excluded += 1;
        } else {
            self.shows.push(show);
        }
    }

    fn reject(&mut self, source: impl Into<String>, error: SchemaValidationError) {
        let diagnostic = Diagnostic::new(source, error);
        warn!(
            source = %diagnostic.source,
            path = %diagnostic.path,
            reason = %diagnostic.reason,
            "skipping invalid show record"
        );
        self.diagnostics.push(diagnostic);
    }

    fn finish(mut self) -> RecordStore {
        // Stable: shows on the same date keep load order.
        self.shows.sort_by_key(|show| show.date);
        RecordStore {
            shows: self.shows,
            diagnostics: self.diagnostics,
            excluded: self.excluded,
        }
    }
}
