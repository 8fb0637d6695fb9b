// SPDX-License-Identifier: GPL-3.0-only

//! Data types and errors for user key configuration files.

use crate::keys::KeyDefinition;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Error Handling Types
// ============================================================================

/// Error type for user key configuration loading.
///
/// Every variant carries enough context for a helpful log line. The panel
/// never surfaces these to the user; they are logged and the user keys are
/// left empty.
#[derive(Debug)]
pub enum ConfigError {
    /// `parse()` was called before `set_input()`
    NoInput,

    /// No default configuration location could be determined
    NoDefaultLocation,

    /// I/O error occurred while reading the configuration file
    IoError {
        /// The underlying I/O error
        source: std::io::Error,
        /// Optional file path that caused the error
        file_path: Option<String>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// JSON parsing error
    JsonError {
        /// The underlying JSON parsing error
        source: serde_json::Error,
        /// Optional file path being parsed
        file_path: Option<String>,
        /// Line number where the error occurred (from serde_json)
        line_number: Option<usize>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// The file declares a format version this crate cannot read
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Highest supported version
        supported: u32,
    },

    /// A key entry is unusable
    InvalidKey {
        /// Position of the key in the `keys` array
        index: usize,
        /// Human-readable description of the problem
        message: String,
    },
}

impl ConfigError {
    /// Creates an I/O error with file path.
    pub fn io_error_with_path(source: std::io::Error, file_path: impl Into<String>) -> Self {
        Self::IoError {
            source,
            file_path: Some(file_path.into()),
            suggestion: Some("Check that the file exists and you have read permissions".into()),
        }
    }

    /// Creates a JSON parsing error with context.
    pub fn json_error(source: serde_json::Error) -> Self {
        let line_number = source.line().into();
        Self::JsonError {
            source,
            file_path: None,
            line_number,
            suggestion: Some("Check the JSON syntax at the indicated line".into()),
        }
    }

    /// Creates a JSON parsing error with file path.
    pub fn json_error_with_path(source: serde_json::Error, file_path: impl Into<String>) -> Self {
        match Self::json_error(source) {
            Self::JsonError {
                source,
                line_number,
                suggestion,
                ..
            } => Self::JsonError {
                source,
                file_path: Some(file_path.into()),
                line_number,
                suggestion,
            },
            other => other,
        }
    }

    /// Creates an invalid key error.
    pub fn invalid_key(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            index,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoInput => {
                write!(f, "No configuration input set")?;
            }
            ConfigError::NoDefaultLocation => {
                write!(f, "Could not determine the default configuration location")?;
            }
            ConfigError::IoError {
                source,
                file_path,
                suggestion,
            } => {
                write!(f, "I/O error")?;
                if let Some(path) = file_path {
                    write!(f, " reading file '{}'", path)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            ConfigError::JsonError {
                source,
                file_path,
                line_number,
                suggestion,
            } => {
                write!(f, "JSON parsing error")?;
                if let Some(path) = file_path {
                    write!(f, " in file '{}'", path)?;
                }
                if let Some(line) = line_number {
                    write!(f, " at line {}", line)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            ConfigError::UnsupportedVersion { found, supported } => {
                write!(
                    f,
                    "Unsupported configuration version {} (supported: up to {})",
                    found, supported
                )?;
            }
            ConfigError::InvalidKey { index, message } => {
                write!(f, "Invalid key at keys[{}]: {}", index, message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::JsonError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::json_error(err)
    }
}

// ============================================================================
// File Format
// ============================================================================

fn default_version() -> u32 {
    1
}

/// A shortcut key entry as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutKeyEntry {
    /// Label drawn on the button; also the key's identity
    pub label: String,

    /// Text typed on click. Defaults to the label.
    #[serde(default)]
    pub text: Option<String>,

    /// Whether Enter is sent after the text
    #[serde(default)]
    pub with_enter: bool,
}

impl ShortcutKeyEntry {
    /// Converts the entry into a key definition.
    pub fn to_key(&self) -> KeyDefinition {
        let text = self.text.clone().unwrap_or_else(|| self.label.clone());
        KeyDefinition::shortcut(self.label.clone(), text, self.with_enter)
    }
}

/// Raw contents of a user key file.
///
/// ```json
/// {
///     "version": 1,
///     "programs": ["bash", "zsh"],
///     "keys": [
///         { "label": "|" },
///         { "label": "ls", "text": "ls -la", "with_enter": true }
///     ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Programs these keys are meant for (informational)
    #[serde(default)]
    pub programs: Vec<String>,

    /// Shortcut keys in display order
    #[serde(default)]
    pub keys: Vec<ShortcutKeyEntry>,
}

/// Parsed user key configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Programs these keys are meant for
    pub programs: Vec<String>,
    /// Shortcut keys in display order
    pub shortcut_keys: Vec<KeyDefinition>,
}

// ============================================================================
// Tests
// ============================================================================
