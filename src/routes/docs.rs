//! API documentation routes: the OpenAPI document and a Swagger UI page that renders it.

use axum::{extract::State, response::Html, routing::get, Json, Router};
use std::sync::Arc;
use utoipa::openapi::OpenApi;

pub const OPENAPI_PATH: &str = "/swagger/openapi.json";

const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>MELI Bootcamp API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/swagger/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

async fn openapi_json(State(doc): State<Arc<OpenApi>>) -> Json<OpenApi> {
    Json(doc.as_ref().clone())
}

async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// GET /swagger, GET /swagger/index.html, GET /swagger/openapi.json.
pub fn docs_routes(doc: OpenApi) -> Router {
    Router::new()
        .route("/swagger", get(swagger_ui))
        .route("/swagger/index.html", get(swagger_ui))
        .route(OPENAPI_PATH, get(openapi_json))
        .with_state(Arc::new(doc))
}
