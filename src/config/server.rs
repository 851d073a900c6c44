use super::{env_lookup, parse_port, var_or};
use crate::error::ConfigError;

const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: 3000,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port("PORT", &var_or(&lookup, "PORT", "3000"))?;
        let body_limit = var_or(&lookup, "BODY_LIMIT_BYTES", &DEFAULT_BODY_LIMIT.to_string());
        let body_limit = body_limit.trim().parse().map_err(|_| ConfigError::Invalid {
            key: "BODY_LIMIT_BYTES".into(),
            reason: format!("expected a byte count, got '{}'", body_limit),
        })?;
        Ok(ServerConfig { port, body_limit })
    }
}
