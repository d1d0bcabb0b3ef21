//! Data access for products: one fixed SQL statement per operation.

mod postgres;
pub mod queries;

pub use postgres::PostgresProductRepository;

use crate::error::AppError;
use crate::model::{Product, ProductRequest};
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All rows ordered by id. An empty table yields an empty vec.
    async fn list_all(&self) -> Result<Vec<Product>, AppError>;

    /// Fails with `NotFound` when no row has this id.
    async fn get_by_id(&self, id: i64) -> Result<Product, AppError>;

    /// Inserts the record and returns it with the generated id.
    async fn insert(&self, product: ProductRequest) -> Result<Product, AppError>;

    /// Replaces every column except id. Fails with `NotFound` when no row matched.
    async fn update(&self, product: Product) -> Result<Product, AppError>;

    async fn update_name(&self, id: i64, name: &str) -> Result<Product, AppError>;

    /// Fails with `NotRemoved` when no row was deleted.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}
