//! Shared application state for all routes.

use crate::service::ProductService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductService>,
}

impl AppState {
    pub fn new<S: ProductService + 'static>(service: S) -> Self {
        Self {
            products: Arc::new(service),
        }
    }
}
