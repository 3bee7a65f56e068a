//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, ServerConfig};

/// Loads and provides access to the engine configuration.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance.yaml").unwrap();
/// println!("Default standard hours: {}", loader.default_standard_hours());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML or mistyped values
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        // An empty file is a valid, all-defaults configuration
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the default standard hours.
    pub fn default_standard_hours(&self) -> Decimal {
        self.config.default_standard_hours
    }

    /// Returns the default strict-time mode.
    pub fn strict_time(&self) -> bool {
        self.config.strict_time
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("./config/attendance.yaml").unwrap();
        assert_eq!(loader.default_standard_hours(), Decimal::new(9, 0));
        assert!(!loader.strict_time());
        assert_eq!(loader.server().port, 3300);
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigLoader::load("/nonexistent/attendance.yaml").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let dir = std::env::temp_dir().join(format!("attendance-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.yaml");
        fs::write(&path, "default_standard_hours: [1, 2").unwrap();

        let err = ConfigLoader::load(&path).unwrap_err();
        match err {
            EngineError::ConfigParseError { path: p, .. } => {
                assert_eq!(p, path.display().to_string())
            }
            other => panic!("unexpected error: {other}"),
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_text_is_default() {
        let loader = ConfigLoader::from_yaml_str("  \n").unwrap();
        assert_eq!(loader.config(), &EngineConfig::default());
    }

    #[test]
    fn test_mistyped_value_is_parse_error() {
        let err = ConfigLoader::from_yaml_str("strict_time: maybe").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParseError { .. }));
    }
}
