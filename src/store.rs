//! Storage handle: owns the PostgreSQL pool. Built once at process start and passed to repositories.

use crate::config::{DatabaseConfig, PoolSettings, Profile};
use crate::error::{AppError, ConfigError};
use sqlx::{ConnectOptions, PgPool};

/// Connection pool for one configuration profile. Cloning shares the same pool.
#[derive(Clone, Debug)]
pub struct StorageHandle {
    pool: PgPool,
    profile: Profile,
}

impl StorageHandle {
    /// Builds a handle from the profile's environment. Connections are opened on first use,
    /// so this does not touch the network.
    pub fn open(profile: Profile) -> Result<Self, ConfigError> {
        let config = DatabaseConfig::from_env(profile)?;
        Ok(Self::with_config(profile, &config, PoolSettings::default()))
    }

    pub fn with_config(profile: Profile, config: &DatabaseConfig, settings: PoolSettings) -> Self {
        tracing::debug!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            ?profile,
            "creating pool"
        );
        let pool = settings.pool_options().connect_lazy_with(config.connect_options());
        StorageHandle { pool, profile }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Waits for checked-out connections to return, then closes the pool. Clones are closed too.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Create the configured database when it does not exist. Connects to the `postgres` maintenance database.
pub async fn ensure_database_exists(config: &DatabaseConfig) -> Result<(), AppError> {
    if config.database.is_empty() || config.database == "postgres" {
        return Ok(());
    }
    let mut conn = config.admin_connect_options().connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&config.database)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %config.database, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&config.database)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_escapes_quotes() {
        assert_eq!(quote_ident("catalog"), "\"catalog\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[tokio::test]
    async fn handles_are_independent() {
        let config = DatabaseConfig::from_lookup(Profile::Test, |_| None).unwrap();
        let prod = StorageHandle::with_config(Profile::Production, &config, PoolSettings::default());
        let test = StorageHandle::with_config(Profile::Test, &config, PoolSettings::default());
        prod.close().await;
        assert!(prod.pool().is_closed());
        assert!(!test.pool().is_closed());
        assert_eq!(test.profile(), Profile::Test);
        test.close().await;
    }
}
