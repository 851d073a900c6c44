#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use catalog_api::{
    build_router, AppError, AppState, CreateProductRequest, Product, ProductRepository,
    ServerConfig, UpdateProductRequest,
};
use chrono::{Duration, Utc};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Repository kept in process memory, with the same contract as the PostgreSQL one.
#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
    next_id: Mutex<i32>,
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<Product, AppError> {
        let new = req.validate()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let now = Utc::now();
        let product = Product {
            id: *next_id,
            name: new.name.to_string(),
            description: new.description.to_string(),
            price: new.price,
            category: new.category.to_string(),
            stock: new.stock,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, AppError> {
        let rows = self.list().await?;
        Ok(rows.into_iter().filter(|p| p.category == category).collect())
    }

    async fn update(&self, id: i32, changes: &UpdateProductRequest) -> Result<Option<Product>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        let changes = changes.validate()?;
        if changes.is_empty() {
            return Ok(Some(row.clone()));
        }
        if let Some(v) = changes.name {
            row.name = v;
        }
        if let Some(v) = changes.description {
            row.description = v;
        }
        if let Some(v) = changes.price {
            row.price = v;
        }
        if let Some(v) = changes.category {
            row.category = v;
        }
        if let Some(v) = changes.stock {
            row.stock = v;
        }
        row.updated_at = Utc::now().max(row.updated_at + Duration::microseconds(1));
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Every call fails the way an exhausted pool does.
pub struct UnavailableProducts;

#[async_trait]
impl ProductRepository for UnavailableProducts {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn create(&self, _req: &CreateProductRequest) -> Result<Product, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn list(&self) -> Result<Vec<Product>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn get_by_id(&self, _id: i32) -> Result<Option<Product>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn list_by_category(&self, _category: &str) -> Result<Vec<Product>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update(&self, _id: i32, _changes: &UpdateProductRequest) -> Result<Option<Product>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: i32) -> Result<bool, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

pub fn app_with(repo: Arc<dyn ProductRepository + Send + Sync>) -> Router {
    build_router(AppState::new(repo), &ServerConfig::default())
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
