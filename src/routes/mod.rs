//! Router assembly.

pub mod common;
pub mod docs;
pub mod products;

pub use common::common_routes;
pub use docs::docs_routes;
pub use products::product_routes;
