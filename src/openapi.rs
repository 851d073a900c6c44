//! OpenAPI document for the HTTP surface.

use crate::handlers::product as h;
use crate::model::{CreateProductRequest, Product, UpdateProductRequest};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Catalog API", description = "CRUD over products"),
    paths(
        h::list_products,
        h::get_product,
        h::create_product,
        h::list_products_by_category,
        h::update_product,
        h::delete_product,
    ),
    components(schemas(Product, CreateProductRequest, UpdateProductRequest)),
    tags((name = "Product", description = "Product catalog"))
)]
pub struct ApiDoc;
