//! Product persistence. [`ProductRepository`] is the seam between HTTP handlers and storage.

mod postgres;

pub use postgres::PgProductRepository;

use crate::error::AppError;
use crate::model::{CreateProductRequest, Product, UpdateProductRequest};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepository + Send + Sync>;

#[async_trait]
pub trait ProductRepository {
    /// Create the `products` table if it is missing. Safe to call on every start.
    async fn ensure_schema(&self) -> Result<(), AppError>;

    /// Validates the request, then inserts. Returns the stored row with its id and timestamps.
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, AppError>;

    /// All products, newest first.
    async fn list(&self) -> Result<Vec<Product>, AppError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError>;

    /// Exact category match, newest first.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, AppError>;

    /// `Ok(None)` when the product does not exist. With no fields supplied the stored row is
    /// returned untouched; otherwise only supplied fields change and `updated_at` is refreshed.
    async fn update(&self, id: i32, changes: &UpdateProductRequest) -> Result<Option<Product>, AppError>;

    /// Whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Round trip to storage, for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
