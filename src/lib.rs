//! Catalog API: REST CRUD over a PostgreSQL `products` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod repository;
pub mod response;
pub mod routes;
pub mod server;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{DatabaseConfig, PoolSettings, Profile, ServerConfig};
pub use error::{AppError, ConfigError};
pub use model::{CreateProductRequest, Product, UpdateProductRequest};
pub use repository::{DynProductRepository, PgProductRepository, ProductRepository};
pub use response::Envelope;
pub use server::{build_router, initialize_database, start_server};
pub use state::AppState;
pub use store::{ensure_database_exists, StorageHandle};
