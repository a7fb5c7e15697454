use super::errors::ConfigError;
use crate::fallback::FallbackAnswers;
use serde::{Deserialize, Serialize};

/// Fixed constants for the default answer: the address pair served when a
/// question cannot be resolved, and the TTL stamped on every record this
/// resolver emits.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FallbackConfig {
    #[serde(default = "default_ipv4")]
    pub ipv4: String,

    #[serde(default = "default_ipv6")]
    pub ipv6: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl FallbackConfig {
    /// Validate the configured literals and build the runtime fallback pair.
    /// Runs once at startup; a malformed literal is a configuration error,
    /// never a per-query condition.
    pub fn build(&self) -> Result<FallbackAnswers, ConfigError> {
        let ipv4 = self.ipv4.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid fallback IPv4 literal: {}", self.ipv4))
        })?;
        let ipv6 = self.ipv6.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid fallback IPv6 literal: {}", self.ipv6))
        })?;
        Ok(FallbackAnswers::new(ipv4, ipv6, self.ttl))
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            ipv4: default_ipv4(),
            ipv6: default_ipv6(),
            ttl: default_ttl(),
        }
    }
}

fn default_ipv4() -> String {
    "91.99.160.200".to_string()
}

fn default_ipv6() -> String {
    "2a01:4f8:1c0c:6ab1::1".to_string()
}

fn default_ttl() -> u32 {
    300
}
