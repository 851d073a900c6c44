//! Process wiring: schema initialization, router assembly, listener.

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::repository::ProductRepository;
use crate::routes::{common_routes, product_routes, route_not_found};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub async fn initialize_database(repo: &(dyn ProductRepository + Send + Sync)) -> Result<(), AppError> {
    repo.ensure_schema().await?;
    tracing::info!("Database tables initialized");
    Ok(())
}

/// Full HTTP surface: `/health`, `/ready`, `/api-docs/openapi.json` and `/api/products...`.
/// Oversized bodies are rejected by the JSON extractor, so they get the failure envelope.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", product_routes(state))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(CorsLayer::permissive())
}

/// Initialize the schema, then bind and serve until the process is stopped.
pub async fn start_server(config: ServerConfig, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    initialize_database(state.products.as_ref()).await?;

    let app = build_router(state, &config);
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    let port = listener.local_addr()?.port();
    tracing::info!("Server running on port {}", port);
    tracing::info!("Health check: http://localhost:{}/health", port);
    tracing::info!("API endpoints: http://localhost:{}/api/products", port);
    axum::serve(listener, app).await?;
    Ok(())
}
