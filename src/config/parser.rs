// SPDX-License-Identifier: GPL-3.0-only

//! Parsing of user key configuration files.

use crate::app_settings;
use crate::config::types::{Config, ConfigError, ConfigFile};
use std::fs;
use std::path::{Path, PathBuf};

/// Stateful parser: set the input file, then parse it.
///
/// # Example
///
/// ```rust,ignore
/// use extra_keys::config::ConfigParser;
///
/// let mut parser = ConfigParser::new();
/// parser.set_input("/home/user/.config/extra-keys/eks/default.json");
/// let config = parser.parse()?;
/// println!("{} shortcut keys", config.shortcut_keys.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigParser {
    input: Option<PathBuf>,
}

impl ConfigParser {
    /// Creates a parser with no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file to parse.
    pub fn set_input(&mut self, path: impl Into<PathBuf>) {
        self.input = Some(path.into());
    }

    /// Parses the input file.
    pub fn parse(&self) -> Result<Config, ConfigError> {
        let path = self.input.as_deref().ok_or(ConfigError::NoInput)?;
        parse_config_file(path)
    }
}

/// Parses a user key file from disk.
pub fn parse_config_file(path: &Path) -> Result<Config, ConfigError> {
    let display_path = path.display().to_string();

    let json_str =
        fs::read_to_string(path).map_err(|e| ConfigError::io_error_with_path(e, &display_path))?;

    let file: ConfigFile = serde_json::from_str(&json_str)
        .map_err(|e| ConfigError::json_error_with_path(e, &display_path))?;

    build_config(file)
}

/// Parses user key configuration from a JSON string.
pub fn parse_config_from_string(json: &str) -> Result<Config, ConfigError> {
    let file: ConfigFile = serde_json::from_str(json)?;
    build_config(file)
}

/// Checks the raw file and converts its entries into key definitions.
///
/// Any bad entry rejects the whole file, so callers never see a partial key list.
fn build_config(file: ConfigFile) -> Result<Config, ConfigError> {
    if file.version > app_settings::CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: file.version,
            supported: app_settings::CONFIG_VERSION,
        });
    }

    let mut shortcut_keys = Vec::with_capacity(file.keys.len());
    for (index, entry) in file.keys.iter().enumerate() {
        if entry.label.trim().is_empty() {
            return Err(ConfigError::invalid_key(index, "label is empty"));
        }
        if entry.text.as_deref() == Some("") {
            return Err(ConfigError::invalid_key(index, "text is empty"));
        }
        shortcut_keys.push(entry.to_key());
    }

    Ok(Config {
        programs: file.programs,
        shortcut_keys,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{KeyAction, KeyCode};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Test 1: Parse a valid string
    #[test]
    fn test_parse_valid_string() {
        let json = r#"{
            "version": 1,
            "programs": ["bash", "zsh"],
            "keys": [
                { "label": "-" },
                { "label": "ls", "text": "ls -la", "with_enter": true }
            ]
        }"#;

        let config = parse_config_from_string(json).expect("Should parse valid config");

        assert_eq!(config.programs, vec!["bash", "zsh"]);
        assert_eq!(config.shortcut_keys.len(), 2);
        assert_eq!(config.shortcut_keys[0].code(), &KeyCode::User("-".into()));
        assert_eq!(
            config.shortcut_keys[1].action(),
            &KeyAction::Text {
                text: "ls -la".into(),
                with_enter: true
            }
        );
    }

    /// Test 2: Missing fields fall back to defaults
    #[test]
    fn test_parse_empty_object() {
        let config = parse_config_from_string("{}").expect("Empty object is valid");
        assert!(config.shortcut_keys.is_empty());
        assert!(config.programs.is_empty());
    }

    /// Test 3: Malformed JSON reports a line number
    #[test]
    fn test_malformed_json() {
        let json = "{\n  \"keys\": [\n    { \"label\": }\n  ]\n}";

        match parse_config_from_string(json) {
            Err(ConfigError::JsonError { line_number, .. }) => {
                assert_eq!(line_number, Some(3));
            }
            other => panic!("Expected JsonError, got {:?}", other),
        }
    }

    /// Test 4: One bad entry rejects the whole file
    #[test]
    fn test_invalid_key_rejects_file() {
        let json = r#"{ "keys": [ { "label": "ok" }, { "label": "  " } ] }"#;

        match parse_config_from_string(json) {
            Err(ConfigError::InvalidKey { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected InvalidKey, got {:?}", other),
        }
    }

    /// Test 5: Newer format versions are refused
    #[test]
    fn test_unsupported_version() {
        let result = parse_config_from_string(r#"{ "version": 2, "keys": [] }"#);
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    /// Test 6: Parser without input fails cleanly
    #[test]
    fn test_parse_without_input() {
        let parser = ConfigParser::new();
        assert!(matches!(parser.parse(), Err(ConfigError::NoInput)));
    }

    /// Test 7: Parser reads from file
    #[test]
    fn test_parse_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(br#"{ "keys": [ { "label": "|" }, { "label": "$" } ] }"#)
            .expect("Failed to write temp file");

        let mut parser = ConfigParser::new();
        parser.set_input(temp_file.path());
        let config = parser.parse().expect("Should parse file");

        assert_eq!(config.shortcut_keys.len(), 2);
    }

    /// Test 8: Missing file is an I/O error with path
    #[test]
    fn test_missing_file() {
        let mut parser = ConfigParser::new();
        parser.set_input("/nonexistent/path/to/default.json");

        match parser.parse() {
            Err(ConfigError::IoError { file_path, .. }) => {
                assert_eq!(file_path.as_deref(), Some("/nonexistent/path/to/default.json"));
            }
            other => panic!("Expected IoError, got {:?}", other),
        }
    }
}
