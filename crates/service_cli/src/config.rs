//! CLI configuration management.
//!
//! Handles loading of configuration from a TOML file with environment
//! variable overrides. A missing file is not an error; defaults apply.
//! A file named explicitly with `--config` that does not exist is reported
//! through [`missing_explicit_path`] so the caller can warn about it.

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "shuffle-sort.toml";

/// Environment variable overriding `default_seed`
pub const ENV_SEED: &str = "SHUFFLE_SORT_SEED";
/// Environment variable overriding `people_seed`
pub const ENV_PEOPLE_SEED: &str = "SHUFFLE_SORT_PEOPLE_SEED";
/// Environment variable overriding `log_level`
pub const ENV_LOG_LEVEL: &str = "SHUFFLE_SORT_LOG_LEVEL";
/// Environment variable overriding `format`
pub const ENV_FORMAT: &str = "SHUFFLE_SORT_FORMAT";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Table,
    /// One JSON document on stdout
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Parse(format!(
                "Unknown format: {}. Supported: table, json",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Seed used when a command gets no `--seed`
    #[serde(default = "default_seed")]
    pub default_seed: i64,

    /// Seed for the people half of the demo
    #[serde(default = "default_people_seed")]
    pub people_seed: i64,

    /// Log level when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format when a command gets no `--format`
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_seed() -> i64 {
    42
}

fn default_people_seed() -> i64 {
    123
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_seed: default_seed(),
            people_seed: default_people_seed(),
            log_level: default_log_level(),
            format: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.default_seed = parse_seed(ENV_SEED, &seed)?;
        }

        if let Some(seed) = lookup(ENV_PEOPLE_SEED) {
            self.people_seed = parse_seed(ENV_PEOPLE_SEED, &seed)?;
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = log_level;
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = format.parse()?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

/// Returns the explicitly requested config path when no such file exists.
///
/// `None` for the implicit default path, which is allowed to be absent.
pub fn missing_explicit_path(explicit: Option<&Path>) -> Option<&Path> {
    explicit.filter(|path| !path.exists())
}

fn parse_seed(key: &str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Parse(format!("{} must be an integer, got '{}'", key, value)))
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file or override
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.default_seed, 42);
        assert_eq!(config.people_seed, 123);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_seed = -7\nformat = \"json\"").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.default_seed, -7);
        assert_eq!(config.people_seed, 123);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seeed = 1").unwrap();

        assert!(matches!(
            CliConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        assert_eq!(missing_explicit_path(Some(&absent)), Some(absent.as_path()));

        let present = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(missing_explicit_path(Some(present.path())), None);

        // Falling back to the default path is silent
        assert_eq!(missing_explicit_path(None), None);
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::default()
            .with_overrides(lookup_from(&[
                (ENV_SEED, "7"),
                (ENV_PEOPLE_SEED, " -3 "),
                (ENV_LOG_LEVEL, "debug"),
                (ENV_FORMAT, "JSON"),
            ]))
            .unwrap();
        assert_eq!(config.default_seed, 7);
        assert_eq!(config.people_seed, -3);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_seed_override() {
        let result = CliConfig::default().with_overrides(lookup_from(&[(ENV_SEED, "forty")]));
        assert!(matches!(result, Err(ConfigError::Parse(msg)) if msg.contains(ENV_SEED)));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = CliConfig {
            log_level: "loud".to_string(),
            ..CliConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("log_level")))
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "DEBUG"] {
            let config = CliConfig {
                log_level: level.to_string(),
                ..CliConfig::default()
            };
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("csv".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
