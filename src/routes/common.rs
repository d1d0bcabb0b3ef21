//! Liveness, readiness and build info, answered in the same envelope as the product routes.

use crate::error::AppError;
use crate::response::{success_ok, Envelope};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn health() -> (StatusCode, Json<Envelope<&'static str>>) {
    success_ok("ok")
}

/// 200 once the store answers a ping, 503 otherwise.
async fn ready(State(state): State<AppState>) -> Result<(StatusCode, Json<Envelope<&'static str>>), AppError> {
    state.products.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "store did not answer readiness ping");
        AppError::Unavailable
    })?;
    Ok(success_ok("ready"))
}

async fn version() -> (StatusCode, Json<Envelope<BuildInfo>>) {
    success_ok(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
