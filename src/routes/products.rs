//! Product CRUD routes, mounted under the API prefix.

use crate::handlers::products::{delete as delete_handler, get_all, get_one, store, update, update_name};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(get_all).post(store))
        .route(
            "/products/:id",
            get(get_one).put(update).patch(update_name).delete(delete_handler),
        )
        .with_state(state)
}
