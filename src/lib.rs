//! Products API: CRUD REST backend for a single `products` table.

pub mod config;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use docs::ApiDoc;
pub use error::{AppError, ConfigError};
pub use model::{NameRequest, Product, ProductRequest};
pub use repository::{PostgresProductRepository, ProductRepository};
pub use response::Envelope;
pub use routes::{common_routes, docs_routes, product_routes};
pub use service::{ProductService, ProductServiceImpl};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_products_table};

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Versioned prefix for the product routes.
pub const API_PREFIX: &str = "/api/v1";

pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application: common routes, docs, and `/api/v1/products*` behind tracing, CORS and a body limit.
/// The limit is enforced by the `Json` extractor, so an oversized body is a 413 in the response envelope.
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_allowed_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES));

    Router::new()
        .merge(common_routes(state.clone()))
        .merge(docs_routes(docs::openapi(config)))
        .nest(API_PREFIX, product_routes(state))
        .layer(middleware)
}
