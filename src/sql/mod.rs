//! SQL for the `products` table: identifiers from a fixed allowlist only, values as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
