//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Uniform wrapper for every endpoint. Exactly one of `data` / `error` is set on a data-carrying call.
#[derive(Debug, Serialize, ToSchema)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Envelope {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Envelope {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

impl Envelope<()> {
    /// Success without a payload (e.g. after delete).
    pub fn message_only(message: impl Into<String>) -> Self {
        Envelope {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }
}

pub fn success_ok<T: Serialize>(data: T, message: impl Into<String>) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(Envelope::success(data, message)))
}

pub fn success_created<T: Serialize>(
    data: T,
    message: impl Into<String>,
) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::CREATED, Json(Envelope::success(data, message)))
}
