//! Server binary: loads `.env`, opens the production storage handle, serves the API.

use catalog_api::{
    ensure_database_exists, start_server, AppState, DatabaseConfig, PgProductRepository, PoolSettings,
    Profile, ServerConfig, StorageHandle,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catalog_api=info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let server = ServerConfig::from_env()?;
    let db = DatabaseConfig::from_env(Profile::Production)?;
    ensure_database_exists(&db).await?;

    let handle = StorageHandle::with_config(Profile::Production, &db, PoolSettings::default());
    let state = AppState::new(Arc::new(PgProductRepository::new(&handle)));
    let result = start_server(server, state).await;
    handle.close().await;
    result
}
