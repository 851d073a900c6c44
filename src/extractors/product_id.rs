//! Numeric product id from the last path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

pub const INVALID_PRODUCT_ID: &str = "Invalid product ID";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductId(pub i32);

pub fn parse_product_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation(INVALID_PRODUCT_ID.into()))
}

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Validation(INVALID_PRODUCT_ID.into()))?;
        parse_product_id(&raw).map(ProductId)
    }
}
