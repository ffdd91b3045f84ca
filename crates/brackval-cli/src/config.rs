//! CLI configuration loaded from an optional TOML file.

use std::{fs, path::Path};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

/// File consulted in the working directory when `--config` is not given.
const DEFAULT_FILE: &str = "brackval.toml";

/// When to colorize verdict output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colorize when stdout is a terminal (default).
    #[default]
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

/// Configuration loading error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConfigError {
    /// Description of the loading error.
    pub message: String,
}

/// CLI configuration options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// When to colorize verdict output.
    pub color: ColorMode,
    /// Suppress verdict output and only set the exit code.
    pub quiet: bool,
}

impl Config {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or names unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError {
            message: e.to_string(),
        })
    }

    /// Load configuration from `explicit`, or from `brackval.toml` in the
    /// working directory, or fall back to defaults when neither exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given path cannot be read, or if
    /// either file fails to parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let fallback = Path::new(DEFAULT_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = fs::read_to_string(path).map_err(|e| ConfigError {
            message: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&text).map_err(|e| ConfigError {
            message: format!("{}: {}", path.display(), e.message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.color, ColorMode::Auto);
        assert!(!config.quiet);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml("color = \"never\"\nquiet = true\n").unwrap();
        assert_eq!(config.color, ColorMode::Never);
        assert!(config.quiet);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_toml("color = \"always\"\n").unwrap();
        assert_eq!(config.color, ColorMode::Always);
        assert!(!config.quiet);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Config::from_toml("colour = \"auto\"\n").is_err());
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        assert!(Config::from_toml("color = \"sometimes\"\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("no/such/brackval.toml"))).unwrap_err();
        assert!(err.message.contains("no/such/brackval.toml"));
    }
}
