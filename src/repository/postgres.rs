//! PostgreSQL implementation of ProductRepository.

use super::queries;
use super::ProductRepository;
use crate::error::AppError;
use crate::model::{Product, ProductRequest};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        tracing::debug!(sql = %queries::SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Product>(queries::SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, AppError> {
        tracing::debug!(sql = %queries::SELECT_ONE, id, "query");
        sqlx::query_as::<_, Product>(queries::SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    async fn insert(&self, product: ProductRequest) -> Result<Product, AppError> {
        tracing::debug!(sql = %queries::INSERT, "query");
        let (id,): (i64,) = sqlx::query_as(queries::INSERT)
            .bind(&product.name)
            .bind(&product.kind)
            .bind(product.count)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(product.into_product(id))
    }

    async fn update(&self, product: Product) -> Result<Product, AppError> {
        tracing::debug!(sql = %queries::UPDATE, id = product.id, "query");
        sqlx::query_as::<_, Product>(queries::UPDATE)
            .bind(&product.name)
            .bind(&product.kind)
            .bind(product.count)
            .bind(product.price)
            .bind(product.id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound(product.id))
    }

    async fn update_name(&self, id: i64, name: &str) -> Result<Product, AppError> {
        tracing::debug!(sql = %queries::UPDATE_NAME, id, "query");
        sqlx::query_as::<_, Product>(queries::UPDATE_NAME)
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(sql = %queries::DELETE, id, "query");
        let result = sqlx::query(queries::DELETE)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotRemoved(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query(queries::PING).fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ensure_products_table;

    fn tenis() -> ProductRequest {
        ProductRequest {
            name: "Tenis".into(),
            kind: "Calçados".into(),
            count: 1,
            price: 342.0,
        }
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn empty_table_lists_nothing(pool: PgPool) {
        ensure_products_table(&pool).await.unwrap();
        let repo = PostgresProductRepository::new(pool);
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn insert_assigns_id_and_reads_back(pool: PgPool) {
        ensure_products_table(&pool).await.unwrap();
        let repo = PostgresProductRepository::new(pool);

        let created = repo.insert(tenis()).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), created);
        assert_eq!(repo.list_all().await.unwrap(), vec![created]);
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn update_and_rename_keep_id(pool: PgPool) {
        ensure_products_table(&pool).await.unwrap();
        let repo = PostgresProductRepository::new(pool);
        let created = repo.insert(tenis()).await.unwrap();

        let mut changed = created.clone();
        changed.count = 20;
        changed.price = 120.0;
        assert_eq!(repo.update(changed.clone()).await.unwrap(), changed);

        let renamed = repo.update_name(created.id, "Fone Game").await.unwrap();
        assert_eq!(renamed.id, created.id);
        assert_eq!(renamed.name, "Fone Game");
        assert_eq!(renamed.count, 20);
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn missing_rows_surface_domain_errors(pool: PgPool) {
        ensure_products_table(&pool).await.unwrap();
        let repo = PostgresProductRepository::new(pool);
        let kept = repo.insert(tenis()).await.unwrap();

        assert!(matches!(repo.get_by_id(999).await, Err(AppError::NotFound(999))));
        assert!(matches!(repo.update_name(999, "x").await, Err(AppError::NotFound(999))));
        assert!(matches!(repo.delete(999).await, Err(AppError::NotRemoved(999))));
        assert_eq!(repo.list_all().await.unwrap(), vec![kept.clone()]);

        repo.delete(kept.id).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
