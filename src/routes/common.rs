//! Common routes: health, readiness, API document.

use super::method_not_allowed;
use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::OpenApi;

#[derive(Serialize)]
struct StatusBody {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    timestamp: String,
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

async fn health() -> Json<StatusBody> {
    Json(StatusBody {
        success: true,
        message: Some("API is running"),
        error: None,
        timestamp: now(),
    })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<StatusBody>) {
    match state.products.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusBody {
                success: true,
                message: Some("Database reachable"),
                error: None,
                timestamp: now(),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusBody {
                    success: false,
                    message: None,
                    error: Some(e.to_string()),
                    timestamp: now(),
                }),
            )
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /health, GET /ready, GET /api-docs/openapi.json.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health).fallback(method_not_allowed))
        .route("/ready", get(ready).fallback(method_not_allowed))
        .route("/api-docs/openapi.json", get(openapi_json).fallback(method_not_allowed))
        .with_state(state)
}
