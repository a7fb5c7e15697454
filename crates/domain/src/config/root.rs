use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::fallback::FallbackConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::fallback::FallbackAnswers;

/// Main configuration structure for Quartz DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Server configuration (port, bind address)
    pub server: ServerConfig,

    /// Record store location and pool sizing
    pub database: DatabaseConfig,

    /// Default answer constants
    pub fallback: FallbackConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Command-line overrides applied on top of the loaded file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. quartz-dns.toml in current directory
    /// 3. /etc/quartz-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("quartz-dns.toml").exists() {
            Self::from_file("quartz-dns.toml")?
        } else if std::path::Path::new("/etc/quartz-dns/config.toml").exists() {
            Self::from_file("/etc/quartz-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate the configuration and build the runtime fallback answers.
    /// Called once at startup so malformed fixed literals fail fast instead
    /// of surfacing mid-query.
    pub fn validate(&self) -> Result<FallbackAnswers, ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        if self.database.path.is_empty() {
            return Err(ConfigError::Validation(
                "Record store path cannot be empty".to_string(),
            ));
        }
        if self.database.read_pool_max_connections == 0 {
            return Err(ConfigError::Validation(
                "Read pool must allow at least one connection".to_string(),
            ));
        }
        self.fallback.build()
    }
}
