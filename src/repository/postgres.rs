use super::ProductRepository;
use crate::error::AppError;
use crate::model::{CreateProductRequest, Product, UpdateProductRequest};
use crate::sql;
use crate::store::StorageHandle;
use async_trait::async_trait;
use sqlx::PgPool;

/// PostgreSQL-backed product repository. Each call is a single statement on a pooled connection.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(handle: &StorageHandle) -> Self {
        PgProductRepository {
            pool: handle.pool().clone(),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        tracing::debug!(sql = %sql::CREATE_PRODUCTS_TABLE, "query");
        sqlx::query(sql::CREATE_PRODUCTS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<Product, AppError> {
        let new = req.validate()?;
        let sql = sql::insert_product();
        tracing::debug!(sql = %sql, name = %new.name, category = %new.category, "query");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(new.name)
            .bind(new.description)
            .bind(new.price)
            .bind(new.category)
            .bind(new.stock)
            .fetch_one(&self.pool)
            .await?;
        Ok(product)
    }

    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let sql = sql::select_all();
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        let sql = sql::select_by_id();
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, AppError> {
        let sql = sql::select_by_category();
        tracing::debug!(sql = %sql, category, "query");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i32, changes: &UpdateProductRequest) -> Result<Option<Product>, AppError> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };
        let changes = changes.validate()?;
        let Some(q) = sql::update_product(id, &changes) else {
            return Ok(Some(existing));
        };
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let args = sql::to_arguments(q.params)?;
        // The row can disappear between the fetch and the update.
        let row = sqlx::query_as_with::<_, Product, _>(&q.sql, args)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = sql::delete_by_id();
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
