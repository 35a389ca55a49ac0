//! Build configuration, read from `tablematch.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tablematch.toml";

/// Configuration for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// A JSON file of show records, or a directory of per-show JSON files.
    pub corpus: PathBuf,

    /// Where `build` writes page data.
    pub out_dir: PathBuf,

    /// Log level name: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            corpus: PathBuf::from("data"),
            out_dir: PathBuf::from("dist"),
            log_level: "warn".to_string(),
        }
    }
}

impl BuildConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Read `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else
    /// fall back to defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuildConfig::from_toml_str("").unwrap();
        assert_eq!(config, BuildConfig::default());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_partial_config() {
        let config = BuildConfig::from_toml_str(
            r#"
            corpus = "py/out"
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.corpus, PathBuf::from("py/out"));
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            BuildConfig::from_toml_str("corpse = \"data\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            BuildConfig::load("/nonexistent/tablematch.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
