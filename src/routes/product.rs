//! Product CRUD routes, mounted under `/api`.

use crate::handlers::product::{
    create_product, delete_product, get_product, list_products, list_products_by_category,
    update_product,
};
use super::method_not_allowed;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(list_products).post(create_product).fallback(method_not_allowed),
        )
        .route(
            "/products/:id",
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .fallback(method_not_allowed),
        )
        .route(
            "/products/category/:category",
            get(list_products_by_category).fallback(method_not_allowed),
        )
        .with_state(state)
}
