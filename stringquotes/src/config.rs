//! Configuration file loading.
//!
//! The preference can be set once per project in `.stringquotes.toml` or in
//! the `[tool.stringquotes]` table of `pyproject.toml`. The command line
//! overrides the file; the default is single quotes.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::quotes::PreferredQuote;

const CONFIG_FILENAME: &str = ".stringquotes.toml";
const PYPROJECT_FILENAME: &str = "pyproject.toml";

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section.
    pub stringquotes: StringQuotesConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for the checker.
pub struct StringQuotesConfig {
    /// String quoting style to enforce. An unrecognized value is rejected
    /// when the file is deserialized, before any check runs.
    #[serde(alias = "string-quotes")]
    pub string_quotes: Option<PreferredQuote>,
}

#[derive(Debug, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: PyProjectTool,
}

#[derive(Debug, Deserialize, Default)]
struct PyProjectTool {
    #[serde(default)]
    stringquotes: StringQuotesConfig,
}

impl Config {
    /// Loads configuration from default locations in the current directory.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let stringquotes_toml = current.join(CONFIG_FILENAME);
            if stringquotes_toml.exists() {
                if let Ok(content) = fs::read_to_string(&stringquotes_toml) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(stringquotes_toml);
                        return config;
                    }
                }
            }

            let pyproject_toml = current.join(PYPROJECT_FILENAME);
            if pyproject_toml.exists() {
                if let Ok(content) = fs::read_to_string(&pyproject_toml) {
                    if let Ok(pyproject) = toml::from_str::<PyProject>(&content) {
                        return Config {
                            stringquotes: pyproject.tool.stringquotes,
                            config_file_path: Some(pyproject_toml),
                        };
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_config_table() {
        let config: Config = toml::from_str(
            r#"
[stringquotes]
string-quotes = "double"
"#,
        )
        .unwrap();
        assert_eq!(
            config.stringquotes.string_quotes,
            Some(PreferredQuote::Double)
        );
    }

    #[test]
    fn test_parse_underscore_key() {
        let config: Config = toml::from_str(
            r#"
[stringquotes]
string_quotes = "single"
"#,
        )
        .unwrap();
        assert_eq!(
            config.stringquotes.string_quotes,
            Some(PreferredQuote::Single)
        );
    }

    #[test]
    fn test_unrecognized_value_is_rejected() {
        let result = toml::from_str::<Config>(
            r#"
[stringquotes]
string-quotes = "triple"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_pyproject_tool_table() {
        let pyproject: PyProject = toml::from_str(
            r#"
[tool.stringquotes]
string-quotes = "double"

[tool.other]
key = 1
"#,
        )
        .unwrap();
        assert_eq!(
            pyproject.tool.stringquotes.string_quotes,
            Some(PreferredQuote::Double)
        );
    }

    #[test]
    fn test_missing_section_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.stringquotes.string_quotes, None);
    }

    #[test]
    fn test_load_from_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[stringquotes]\nstring-quotes = \"double\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(
            config.stringquotes.string_quotes,
            Some(PreferredQuote::Double)
        );
        assert_eq!(
            config.config_file_path,
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }
}
