//! OpenAPI document for the products API.

use crate::config::ServerConfig;
use crate::handlers::products;
use crate::model::{NameRequest, Product, ProductRequest};
use utoipa::openapi::server::Server;
use utoipa::{OpenApi, ToSchema};

/// Success envelope carrying one product.
#[derive(ToSchema)]
pub struct ProductEnvelope {
    #[schema(example = 200)]
    pub code: u16,
    pub data: Product,
    #[schema(example = "Success")]
    pub message: String,
}

/// Success envelope carrying a list of products.
#[derive(ToSchema)]
pub struct ProductListEnvelope {
    #[schema(example = 200)]
    pub code: u16,
    pub data: Vec<Product>,
    #[schema(example = "Success")]
    pub message: String,
}

/// Failure envelope.
#[derive(ToSchema)]
pub struct ErrorEnvelope {
    #[schema(example = 404)]
    pub code: u16,
    #[schema(example = "product 7 is not registered")]
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MELI Bootcamp API",
        version = "1.0",
        description = "This API handles MELI products.",
        terms_of_service = "http://developers.mercadolibre.com.ar/es_ar/terminos-y-condiciones",
        contact(name = "API Support", url = "http://developers.mercadolibre.com.ar/support"),
        license(name = "Apache 2.0", url = "http://www.apache.org/licenses/LICENSE-2.0.html")
    ),
    paths(
        products::get_all,
        products::get_one,
        products::store,
        products::update,
        products::update_name,
        products::delete,
    ),
    components(schemas(
        Product,
        ProductRequest,
        NameRequest,
        ProductEnvelope,
        ProductListEnvelope,
        ErrorEnvelope
    )),
    tags((name = "products", description = "Product CRUD"))
)]
pub struct ApiDoc;

/// Document with the server URL advertised for this deployment.
pub fn openapi(config: &ServerConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(config.api_base_url())]);
    doc
}
