//! Request extractors that reject with the uniform error envelope.

mod json;
mod product_id;

pub use json::ValidJson;
pub use product_id::{parse_product_id, ProductId, INVALID_PRODUCT_ID};
