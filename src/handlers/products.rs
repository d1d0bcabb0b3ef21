//! Product handlers: parse the request, call the service, wrap the result in the envelope.

use crate::docs::{ErrorEnvelope, ProductEnvelope, ProductListEnvelope};
use crate::error::AppError;
use crate::extractors::ProductId;
use crate::model::{NameRequest, ProductRequest};
use crate::response::success_ok;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "Every stored product, possibly none", body = ProductListEnvelope),
        (status = 500, description = "Store failure", body = ErrorEnvelope)
    )
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state.products.get_all().await?;
    Ok(success_ok(products))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ProductEnvelope),
        (status = 400, description = "Non-numeric id", body = ErrorEnvelope),
        (status = 404, description = "No product with this id", body = ErrorEnvelope)
    )
)]
pub async fn get_one(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    let product = state.products.get_one(id).await?;
    Ok(success_ok(product))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Created product with its assigned id", body = ProductEnvelope),
        (status = 400, description = "Body is not JSON", body = ErrorEnvelope),
        (status = 422, description = "Missing or invalid fields", body = ErrorEnvelope)
    )
)]
pub async fn store(
    State(state): State<AppState>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let product = state.products.store(body).await?;
    tracing::info!(id = product.id, "product created");
    Ok(success_ok(product))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Replaced product", body = ProductEnvelope),
        (status = 400, description = "Non-numeric id or body is not JSON", body = ErrorEnvelope),
        (status = 404, description = "No product with this id", body = ErrorEnvelope),
        (status = 422, description = "Missing or invalid fields", body = ErrorEnvelope)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let product = state.products.update(id, body).await?;
    Ok(success_ok(product))
}

#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = NameRequest,
    responses(
        (status = 200, description = "Renamed product", body = ProductEnvelope),
        (status = 400, description = "Non-numeric id or body is not JSON", body = ErrorEnvelope),
        (status = 404, description = "No product with this id", body = ErrorEnvelope),
        (status = 422, description = "Name missing or blank", body = ErrorEnvelope)
    )
)]
pub async fn update_name(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    body: Result<Json<NameRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(NameRequest { name }) = body?;
    let product = state.products.update_name(id, name).await?;
    Ok(success_ok(product))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product removed"),
        (status = 400, description = "Non-numeric id, or no row was removed", body = ErrorEnvelope)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    state.products.delete(id).await?;
    tracing::info!(id, "product removed");
    Ok(StatusCode::NO_CONTENT)
}
