//! Database connection settings. Production keys are `DB_*`; the isolated test profile reads `TEST_DB_*`.

use super::{env_lookup, parse_port, var_or};
use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::time::Duration;

/// Which configuration namespace a handle is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Production,
    Test,
}

impl Profile {
    pub fn prefix(self) -> &'static str {
        match self {
            Profile::Production => "",
            Profile::Test => "TEST_",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DatabaseConfig {
    pub fn from_env(profile: Profile) -> Result<Self, ConfigError> {
        Self::from_lookup(profile, env_lookup)
    }

    /// Missing keys fall back to local development values.
    pub fn from_lookup(
        profile: Profile,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let key = |name: &str| format!("{}{}", profile.prefix(), name);
        let port_key = key("DB_PORT");
        let port = parse_port(&port_key, &var_or(&lookup, &port_key, "5432"))?;
        Ok(DatabaseConfig {
            host: var_or(&lookup, &key("DB_HOST"), "localhost"),
            port,
            database: var_or(&lookup, &key("DB_NAME"), "curso_qa"),
            user: var_or(&lookup, &key("DB_USER"), "postgres"),
            password: var_or(&lookup, &key("DB_PASSWORD"), "password"),
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }

    /// Same server and credentials, maintenance database `postgres`.
    pub fn admin_connect_options(&self) -> PgConnectOptions {
        self.connect_options().database("postgres")
    }
}

/// Pool bounds shared by every handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        PoolSettings {
            max_connections: 20,
            idle_timeout: Duration::from_secs(30),
            acquire_timeout: Duration::from_secs(2),
        }
    }
}

impl PoolSettings {
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .idle_timeout(self.idle_timeout)
            .acquire_timeout(self.acquire_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = DatabaseConfig::from_lookup(Profile::Production, lookup(&[])).unwrap();
        assert_eq!(
            cfg,
            DatabaseConfig {
                host: "localhost".into(),
                port: 5432,
                database: "curso_qa".into(),
                user: "postgres".into(),
                password: "password".into(),
            }
        );
    }

    #[test]
    fn test_profile_reads_prefixed_keys_only() {
        let env = [
            ("DB_NAME", "catalog"),
            ("TEST_DB_NAME", "catalog_test"),
            ("TEST_DB_PORT", "5433"),
        ];
        let prod = DatabaseConfig::from_lookup(Profile::Production, lookup(&env)).unwrap();
        let test = DatabaseConfig::from_lookup(Profile::Test, lookup(&env)).unwrap();
        assert_eq!(prod.database, "catalog");
        assert_eq!(prod.port, 5432);
        assert_eq!(test.database, "catalog_test");
        assert_eq!(test.port, 5433);
    }

    #[test]
    fn blank_value_uses_default() {
        let cfg = DatabaseConfig::from_lookup(Profile::Production, lookup(&[("DB_HOST", "  ")])).unwrap();
        assert_eq!(cfg.host, "localhost");
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = DatabaseConfig::from_lookup(Profile::Test, lookup(&[("TEST_DB_PORT", "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref key, .. } if key == "TEST_DB_PORT"));
    }

    #[test]
    fn pool_defaults() {
        let s = PoolSettings::default();
        assert_eq!(s.max_connections, 20);
        assert_eq!(s.idle_timeout, Duration::from_secs(30));
        assert_eq!(s.acquire_timeout, Duration::from_secs(2));
    }
}
