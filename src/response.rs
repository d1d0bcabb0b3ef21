//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Success";

/// Uniform body for every JSON response: `{code, data?, error?, message?}`.
#[derive(Serialize, Deserialize, Debug)]
pub struct Envelope<T> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(status: StatusCode, data: T) -> Self {
        Envelope {
            code: status.as_u16(),
            data: Some(data),
            error: None,
            message: Some(SUCCESS_MESSAGE.to_string()),
        }
    }

    pub fn error(status: StatusCode, error: String) -> Self {
        Envelope {
            code: status.as_u16(),
            data: None,
            error: Some(error),
            message: None,
        }
    }
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(Envelope::success(StatusCode::OK, data)))
}
