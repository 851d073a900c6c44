mod common;
mod product;

pub use common::common_routes;
pub use product::product_routes;

use crate::response::Envelope;
use axum::{http::StatusCode, Json};

/// Fallback for paths no route matches.
pub async fn route_not_found() -> (StatusCode, Json<Envelope<()>>) {
    (StatusCode::NOT_FOUND, Json(Envelope::failure("Route not found")))
}

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> (StatusCode, Json<Envelope<()>>) {
    (StatusCode::METHOD_NOT_ALLOWED, Json(Envelope::failure("Method not allowed")))
}
