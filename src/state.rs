//! Shared application state for all routes.

use crate::repository::DynProductRepository;

#[derive(Clone)]
pub struct AppState {
    pub products: DynProductRepository,
}

impl AppState {
    pub fn new(products: DynProductRepository) -> Self {
        AppState { products }
    }
}
