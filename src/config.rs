// SPDX-License-Identifier: GPL-3.0-only

//! User configuration loaded from an optional JSON file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::catalog;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io {
        source: std::io::Error,
        file_path: String,
    },
    /// The configuration file is not valid JSON for [`Config`]
    Json {
        source: serde_json::Error,
        file_path: String,
        suggestion: Option<String>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { source, file_path } => {
                write!(f, "I/O error reading config '{}': {}", file_path, source)
            }
            ConfigError::Json {
                source,
                file_path,
                suggestion,
            } => {
                write!(
                    f,
                    "Invalid config '{}' at line {}: {}",
                    file_path,
                    source.line(),
                    source
                )?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Json { source, .. } => Some(source),
        }
    }
}

fn default_model() -> String {
    catalog::DEFAULT_MODEL.to_string()
}

fn default_true() -> bool {
    true
}

/// Runtime settings for the tester binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Model selected at startup.
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Repaint the keyboard to stdout after every key event.
    #[serde(default = "default_true")]
    pub render_after_event: bool,

    /// Print the list of untested keys when the session ends.
    #[serde(default = "default_true")]
    pub print_summary_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            render_after_event: true,
            print_summary_on_exit: true,
        }
    }
}

impl Config {
    /// Reads a configuration file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_path = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            source,
            file_path: file_path.clone(),
        })?;
        Self::from_json(&json).map_err(|source| ConfigError::Json {
            source,
            file_path,
            suggestion: Some(
                "Known fields are default_model, render_after_event and print_summary_on_exit"
                    .into(),
            ),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_model, "windows-full");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "default_model": "laptop-fn", "render_after_event": false }}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.default_model, "laptop-fn");
        assert!(!config.render_after_event);
        assert!(config.print_summary_on_exit, "Unset field keeps its default");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_unknown_field_is_json_error_with_suggestion() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "theme": "dark" }}"#).unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
        assert!(err.to_string().contains("Suggestion"));
    }
}
