//! Environment-driven configuration for the database handle and the HTTP server.

pub mod database;
pub mod server;

pub use database::*;
pub use server::*;

use crate::error::ConfigError;

/// Reads `key` through `lookup`, falling back to `default` when unset or blank.
pub(crate) fn var_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub(crate) fn parse_port(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidPort {
        key: key.to_string(),
        value: value.to_string(),
    })
}

pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
