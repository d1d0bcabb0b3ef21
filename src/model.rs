//! Product record and request bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored product. `id` is assigned by the database on insert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Tenis")]
    pub name: String,
    /// Category label.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    #[schema(example = "Calçados")]
    pub kind: String,
    /// Units in stock.
    pub count: i64,
    #[schema(example = 342.0)]
    pub price: f64,
}

/// Body of POST and PUT. Every field is required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub count: i64,
    pub price: f64,
}

impl ProductRequest {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            kind: self.kind,
            count: self.count,
            price: self.price,
        }
    }
}

/// Body of PATCH: renames a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NameRequest {
    pub name: String,
}
