use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::error::ConfigError;

/// Number of message types the built-in registry is expected to enumerate.
pub const DEFAULT_EXPECTED_COUNT: usize = 6;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Where a loaded [`Config`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    /// The file did not exist and defaults were used.
    Defaults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub capability: Capability,
    pub expected_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

/// Capability surface handed out by a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Lite,
    Full,
}

impl Capability {
    /// Capability selected by the `lite` cargo feature.
    pub const fn build_default() -> Self {
        if cfg!(feature = "lite") {
            Capability::Lite
        } else {
            Capability::Full
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Lite => "lite",
            Capability::Full => "full",
        }
    }
}

impl Default for Capability {
    fn default() -> Self {
        Self::build_default()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lite" => Ok(Capability::Lite),
            "full" => Ok(Capability::Full),
            other => Err(ConfigError::InvalidValue {
                field: "registry.capability".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capability: Capability::default(),
            expected_count: DEFAULT_EXPECTED_COUNT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_source(path).map(|(config, _)| config)
    }

    /// Like [`Config::load`], also reporting whether the file was found.
    /// Runs before logging is set up, so callers log the outcome.
    pub fn load_with_source(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if !path.exists() {
            return Ok((Config::default(), ConfigSource::Defaults));
        }
        let contents = std::fs::read_to_string(path)?;
        Ok((Self::from_toml_str(&contents)?, ConfigSource::File))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registry.expected_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "registry.expected_count".to_string(),
                value: "0".to_string(),
            });
        }
        let level = self.logging.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.log_level".to_string(),
                value: self.logging.log_level.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.registry.expected_count, DEFAULT_EXPECTED_COUNT);
        assert_eq!(config.registry.capability, Capability::build_default());
        assert_eq!(config.logging.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [registry]
            capability = "lite"
            "#,
        )
        .unwrap();
        assert_eq!(config.registry.capability, Capability::Lite);
        assert_eq!(config.registry.expected_count, DEFAULT_EXPECTED_COUNT);
        assert_eq!(config.logging.log_level, "info");
    }

    #[test]
    fn test_rejects_zero_expected_count() {
        let err = Config::from_toml_str("[registry]\nexpected_count = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "registry.expected_count"));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let err = Config::from_toml_str("[logging]\nlog_level = \"chatty\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "logging.log_level"));
    }

    #[test]
    fn test_rejects_unknown_capability() {
        let err = Config::from_toml_str("[registry]\ncapability = \"nano\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[registry]\ncapability = \"full\"\nexpected_count = 7").unwrap();
        writeln!(file, "[logging]\nlog_level = \"debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.registry.capability, Capability::Full);
        assert_eq!(config.registry.expected_count, 7);
        assert_eq!(config.logging.log_level, "debug");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_reports_source() {
        let dir = tempfile::tempdir().unwrap();
        let (_, source) = Config::load_with_source(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(source, ConfigSource::Defaults);

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlog_level = \"warn\"").unwrap();
        let (config, source) = Config::load_with_source(file.path()).unwrap();
        assert_eq!(source, ConfigSource::File);
        assert_eq!(config.logging.log_level, "warn");
    }

    #[test]
    fn test_capability_from_str() {
        assert_eq!("LITE".parse::<Capability>().unwrap(), Capability::Lite);
        assert_eq!(" full ".parse::<Capability>().unwrap(), Capability::Full);
        assert!("nano".parse::<Capability>().is_err());
    }
}
