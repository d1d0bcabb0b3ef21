//! ProductService: forwards to the repository after superficial validation.

use super::RequestValidator;
use crate::error::AppError;
use crate::model::{Product, ProductRequest};
use crate::repository::ProductRepository;
use async_trait::async_trait;

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, AppError>;
    async fn get_one(&self, id: i64) -> Result<Product, AppError>;
    async fn store(&self, body: ProductRequest) -> Result<Product, AppError>;
    async fn update(&self, id: i64, body: ProductRequest) -> Result<Product, AppError>;
    async fn update_name(&self, id: i64, name: String) -> Result<Product, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn ping(&self) -> Result<(), AppError>;
}

pub struct ProductServiceImpl<R> {
    repository: R,
}

impl<R: ProductRepository> ProductServiceImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProductRepository> ProductService for ProductServiceImpl<R> {
    async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        self.repository.list_all().await
    }

    async fn get_one(&self, id: i64) -> Result<Product, AppError> {
        self.repository.get_by_id(id).await
    }

    async fn store(&self, body: ProductRequest) -> Result<Product, AppError> {
        RequestValidator::validate(&body)?;
        self.repository.insert(body).await
    }

    async fn update(&self, id: i64, body: ProductRequest) -> Result<Product, AppError> {
        RequestValidator::validate(&body)?;
        self.repository.update(body.into_product(id)).await
    }

    async fn update_name(&self, id: i64, name: String) -> Result<Product, AppError> {
        RequestValidator::validate_name(&name)?;
        self.repository.update_name(id, &name).await
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Vec-backed repository with sequential ids.
    #[derive(Default)]
    struct MemoryRepository {
        rows: Mutex<Vec<Product>>,
    }

    #[async_trait]
    impl ProductRepository for MemoryRepository {
        async fn list_all(&self) -> Result<Vec<Product>, AppError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn get_by_id(&self, id: i64) -> Result<Product, AppError> {
            let rows = self.rows.lock().unwrap();
            rows.iter().find(|p| p.id == id).cloned().ok_or(AppError::NotFound(id))
        }

        async fn insert(&self, product: ProductRequest) -> Result<Product, AppError> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let created = product.into_product(id);
            rows.push(created.clone());
            Ok(created)
        }

        async fn update(&self, product: Product) -> Result<Product, AppError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|p| p.id == product.id)
                .ok_or(AppError::NotFound(product.id))?;
            *row = product.clone();
            Ok(product)
        }

        async fn update_name(&self, id: i64, name: &str) -> Result<Product, AppError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows.iter_mut().find(|p| p.id == id).ok_or(AppError::NotFound(id))?;
            row.name = name.to_string();
            Ok(row.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), AppError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|p| p.id != id);
            if rows.len() == before {
                return Err(AppError::NotRemoved(id));
            }
            Ok(())
        }

        async fn ping(&self) -> Result<(), AppError> {
            Ok(())
        }
    }

    fn request(name: &str) -> ProductRequest {
        ProductRequest {
            name: name.into(),
            kind: "Informatica".into(),
            count: 1,
            price: 100.0,
        }
    }

    #[tokio::test]
    async fn empty_store_lists_empty_vec() {
        let service = ProductServiceImpl::new(MemoryRepository::default());
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_then_update_keeps_assigned_id() {
        let service = ProductServiceImpl::new(MemoryRepository::default());
        let created = service.store(request("Monitor")).await.unwrap();
        assert_eq!(created.id, 1);

        let mut changed = request("Mouse");
        changed.count = 20;
        let updated = service.update(created.id, changed).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(service.get_one(created.id).await.unwrap().name, "Mouse");

        let renamed = service.update_name(created.id, "Fone Game".into()).await.unwrap();
        assert_eq!(renamed.count, 20);
        assert_eq!(renamed.name, "Fone Game");
    }

    #[tokio::test]
    async fn invalid_body_never_reaches_repository() {
        let service = ProductServiceImpl::new(MemoryRepository::default());
        let err = service.store(request(" ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(service.get_all().await.unwrap().is_empty());

        let err = service.update_name(1, String::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn deleting_missing_id_reports_not_removed() {
        let service = ProductServiceImpl::new(MemoryRepository::default());
        let kept = service.store(request("Monitor")).await.unwrap();

        assert!(matches!(service.delete(99).await, Err(AppError::NotRemoved(99))));
        assert_eq!(service.get_all().await.unwrap(), vec![kept.clone()]);

        service.delete(kept.id).await.unwrap();
        assert!(matches!(service.get_one(kept.id).await, Err(AppError::NotFound(_))));
    }
}
