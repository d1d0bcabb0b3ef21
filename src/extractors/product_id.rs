//! Extract the numeric product id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Product id parsed from the path. A non-numeric id is a 400 before the body is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        raw.trim()
            .parse::<i64>()
            .map(ProductId)
            .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", raw)))
    }
}
