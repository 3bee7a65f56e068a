//! Configuration types.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every key is optional.

use rust_decimal::Decimal;
use serde::Deserialize;

fn default_standard_hours() -> Decimal {
    Decimal::new(9, 0)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3300
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// The port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Engine configuration.
///
/// # Example
///
/// ```
/// use attendance_engine::config::EngineConfig;
/// use rust_decimal::Decimal;
///
/// let config: EngineConfig = serde_yaml::from_str("strict_time: true").unwrap();
/// assert!(config.strict_time);
/// assert_eq!(config.default_standard_hours, Decimal::new(9, 0));
/// assert_eq!(config.server.port, 3300);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Standard hours used for rows without them and for empty summaries.
    #[serde(default = "default_standard_hours")]
    pub default_standard_hours: Decimal,
    /// Strict-time mode used when a request does not choose one.
    #[serde(default)]
    pub strict_time: bool,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_standard_hours: default_standard_hours(),
            strict_time: false,
            server: ServerConfig::default(),
        }
    }
}
