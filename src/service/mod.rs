//! Product service layer between handlers and the repository.

mod products;
mod validation;
pub use products::{ProductService, ProductServiceImpl};
pub use validation::{RequestValidator, NAME_MAX_LENGTH};
