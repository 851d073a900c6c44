//! Statement text for the product repository, plus the partial UPDATE builder.

use super::params::BindValue;
use crate::model::UpdateProductRequest;

pub const PRODUCTS_TABLE: &str = "products";

pub const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        description TEXT NOT NULL,
        price NUMERIC(10,2) NOT NULL CHECK (price >= 0),
        category VARCHAR(100) NOT NULL,
        stock INTEGER NOT NULL CHECK (stock >= 0),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        CHECK (created_at <= updated_at)
    )
"#;

const PRODUCT_COLUMNS: &str = "id, name, description, price, category, stock, created_at, updated_at";

/// Newest first; id breaks ties between rows created in the same instant.
const NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";

pub fn insert_product() -> String {
    format!(
        "INSERT INTO {PRODUCTS_TABLE} (name, description, price, category, stock) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {PRODUCT_COLUMNS}"
    )
}

pub fn select_all() -> String {
    format!("SELECT {PRODUCT_COLUMNS} FROM {PRODUCTS_TABLE} {NEWEST_FIRST}")
}

pub fn select_by_id() -> String {
    format!("SELECT {PRODUCT_COLUMNS} FROM {PRODUCTS_TABLE} WHERE id = $1")
}

pub fn select_by_category() -> String {
    format!("SELECT {PRODUCT_COLUMNS} FROM {PRODUCTS_TABLE} WHERE category = $1 {NEWEST_FIRST}")
}

pub fn delete_by_id() -> String {
    format!("DELETE FROM {PRODUCTS_TABLE} WHERE id = $1")
}

/// Columns a client may change. Never built from caller-supplied names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductColumn {
    Name,
    Description,
    Price,
    Category,
    Stock,
}

impl ProductColumn {
    pub fn name(self) -> &'static str {
        match self {
            ProductColumn::Name => "name",
            ProductColumn::Description => "description",
            ProductColumn::Price => "price",
            ProductColumn::Category => "category",
            ProductColumn::Stock => "stock",
        }
    }
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// UPDATE for the supplied fields only, always refreshing `updated_at`. The id is the last parameter.
/// Returns `None` when nothing was supplied.
pub fn update_product(id: i32, changes: &UpdateProductRequest) -> Option<QueryBuf> {
    let supplied = [
        (ProductColumn::Name, changes.name.clone().map(BindValue::Text)),
        (ProductColumn::Description, changes.description.clone().map(BindValue::Text)),
        (ProductColumn::Price, changes.price.map(BindValue::Decimal)),
        (ProductColumn::Category, changes.category.clone().map(BindValue::Text)),
        (ProductColumn::Stock, changes.stock.map(BindValue::Int)),
    ];

    let mut q = QueryBuf::new();
    let mut set_parts = Vec::new();
    for (column, value) in supplied {
        if let Some(v) = value {
            let n = q.push_param(v);
            set_parts.push(format!("{} = ${}", column.name(), n));
        }
    }
    if set_parts.is_empty() {
        return None;
    }
    set_parts.push("updated_at = NOW()".to_string());
    let id_param = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE id = ${} RETURNING {}",
        PRODUCTS_TABLE,
        set_parts.join(", "),
        id_param,
        PRODUCT_COLUMNS
    );
    Some(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn empty_update_builds_nothing() {
        assert!(update_product(1, &UpdateProductRequest::default()).is_none());
    }

    #[test]
    fn update_sets_only_supplied_columns() {
        let changes = UpdateProductRequest {
            stock: Some(7),
            ..Default::default()
        };
        let q = update_product(42, &changes).unwrap();
        assert_eq!(
            q.sql,
            format!("UPDATE products SET stock = $1, updated_at = NOW() WHERE id = $2 RETURNING {PRODUCT_COLUMNS}")
        );
        assert_eq!(q.params, vec![BindValue::Int(7), BindValue::Int(42)]);
    }

    #[test]
    fn update_params_follow_column_order() {
        let changes = UpdateProductRequest {
            category: Some("Books".into()),
            price: Some(Decimal::new(1999, 2)),
            name: Some("Novel".into()),
            ..Default::default()
        };
        let q = update_product(3, &changes).unwrap();
        assert!(q
            .sql
            .starts_with("UPDATE products SET name = $1, price = $2, category = $3, updated_at = NOW() WHERE id = $4"));
        assert_eq!(
            q.params,
            vec![
                BindValue::Text("Novel".into()),
                BindValue::Decimal(Decimal::new(1999, 2)),
                BindValue::Text("Books".into()),
                BindValue::Int(3),
            ]
        );
    }

    #[test]
    fn listings_are_newest_first() {
        assert!(select_all().ends_with("ORDER BY created_at DESC, id DESC"));
        assert!(select_by_category().contains("WHERE category = $1 ORDER BY created_at DESC"));
    }

    #[test]
    fn schema_enforces_non_negative_values() {
        assert!(CREATE_PRODUCTS_TABLE.contains("CHECK (price >= 0)"));
        assert!(CREATE_PRODUCTS_TABLE.contains("CHECK (stock >= 0)"));
        assert!(CREATE_PRODUCTS_TABLE.contains("IF NOT EXISTS"));
    }
}
