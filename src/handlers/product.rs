//! Product handlers: shape validation here, persistence in the repository.

use crate::error::AppError;
use crate::extractors::{ProductId, ValidJson};
use crate::model::{CreateProductRequest, Product, UpdateProductRequest};
use crate::response::{success_created, success_ok, Envelope};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";

fn not_found() -> AppError {
    AppError::NotFound(PRODUCT_NOT_FOUND.into())
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    responses(
        (status = 200, description = "All products, newest first", body = Envelope<Vec<Product>>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state.products.list().await?;
    Ok(success_ok(products, "Products retrieved successfully"))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Envelope<Product>),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No such product"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    let product = state.products.get_by_id(id).await?.ok_or_else(not_found)?;
    Ok(success_ok(product, "Product retrieved successfully"))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Envelope<Product>),
        (status = 400, description = "Missing fields or negative price/stock"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let product = state.products.create(&req).await?;
    tracing::info!(id = product.id, category = %product.category, "product created");
    Ok(success_created(product, "Product created successfully"))
}

#[utoipa::path(
    get,
    path = "/api/products/category/{category}",
    tag = "Product",
    params(("category" = String, Path, description = "Exact category name")),
    responses(
        (status = 200, description = "Products in the category, possibly none", body = Envelope<Vec<Product>>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let products = state.products.list_by_category(&category).await?;
    Ok(success_ok(
        products,
        format!("Products in category '{}' retrieved successfully", category),
    ))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product after the update", body = Envelope<Product>),
        (status = 400, description = "Invalid id or field values"),
        (status = 404, description = "No such product"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    ValidJson(changes): ValidJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    changes.validate()?;
    let product = state.products.update(id, &changes).await?.ok_or_else(not_found)?;
    Ok(success_ok(product, "Product updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No such product"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    if !state.products.delete(id).await? {
        return Err(not_found());
    }
    tracing::info!(id, "product deleted");
    Ok((StatusCode::OK, Json(Envelope::message_only("Product deleted successfully"))))
}
