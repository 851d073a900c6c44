//! Product entity and request shapes.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub const MISSING_FIELDS: &str = "Missing required fields: name, description, price, category, stock";
pub const NEGATIVE_VALUES: &str = "Price and stock must be non-negative";

/// Column widths of `name` and `category`, in characters.
pub const MAX_NAME_LEN: usize = 255;
pub const MAX_CATEGORY_LEN: usize = 100;

/// Largest value a NUMERIC(10,2) price column holds.
pub fn max_price() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "1500.99")]
    pub price: Decimal,
    pub category: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/products`. Every field is optional on the wire so that a missing
/// field is reported as a validation failure instead of a decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<f64>, example = 1500.99)]
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub stock: Option<i32>,
}

/// Validated insert values borrowed from a [`CreateProductRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: Decimal,
    pub category: &'a str,
    pub stock: i32,
}

impl CreateProductRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
        stock: i32,
    ) -> Self {
        CreateProductRequest {
            name: Some(name.into()),
            description: Some(description.into()),
            price: Some(price),
            category: Some(category.into()),
            stock: Some(stock),
        }
    }

    /// Presence first, then ranges. Empty text counts as missing; zero is a valid number.
    pub fn validate(&self) -> Result<NewProduct<'_>, AppError> {
        let (Some(name), Some(description), Some(price), Some(category), Some(stock)) = (
            non_empty(&self.name),
            non_empty(&self.description),
            self.price,
            non_empty(&self.category),
            self.stock,
        ) else {
            return Err(AppError::Validation(MISSING_FIELDS.into()));
        };
        if price < Decimal::ZERO || stock < 0 {
            return Err(AppError::Validation(NEGATIVE_VALUES.into()));
        }
        check_len("name", name, MAX_NAME_LEN)?;
        check_len("category", category, MAX_CATEGORY_LEN)?;
        Ok(NewProduct {
            name,
            description,
            price: checked_price(price)?,
            category,
            stock,
        })
    }
}

/// Body of `PUT /api/products/:id`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub stock: Option<i32>,
}

impl UpdateProductRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.stock.is_none()
    }

    /// Checks only the supplied fields and normalizes the price scale.
    pub fn validate(&self) -> Result<UpdateProductRequest, AppError> {
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("category", &self.category),
        ] {
            if matches!(value, Some(v) if v.is_empty()) {
                return Err(AppError::Validation(format!("{} must not be empty", field)));
            }
        }
        if self.price.is_some_and(|p| p < Decimal::ZERO) || self.stock.is_some_and(|s| s < 0) {
            return Err(AppError::Validation(NEGATIVE_VALUES.into()));
        }
        if let Some(name) = &self.name {
            check_len("name", name, MAX_NAME_LEN)?;
        }
        if let Some(category) = &self.category {
            check_len("category", category, MAX_CATEGORY_LEN)?;
        }
        Ok(UpdateProductRequest {
            price: self.price.map(checked_price).transpose()?,
            ..self.clone()
        })
    }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

fn checked_price(price: Decimal) -> Result<Decimal, AppError> {
    let price = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if price > max_price() {
        return Err(AppError::Validation(format!("Price must not exceed {}", max_price())));
    }
    Ok(price)
}
