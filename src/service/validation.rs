//! Request validation for product bodies.

use crate::error::AppError;
use crate::model::ProductRequest;

pub const NAME_MAX_LENGTH: usize = 255;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a full product body (POST and PUT).
    pub fn validate(body: &ProductRequest) -> Result<(), AppError> {
        validate_name(&body.name)?;
        validate_text("type", &body.kind)?;
        if body.count < 0 {
            return Err(AppError::Validation("count must be at least 0".into()));
        }
        if !body.price.is_finite() || body.price < 0.0 {
            return Err(AppError::Validation("price must be a number at least 0".into()));
        }
        Ok(())
    }

    /// Validate only the name (PATCH).
    pub fn validate_name(name: &str) -> Result<(), AppError> {
        validate_name(name)
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    validate_text("name", name)?;
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "name must be at most {} characters",
            NAME_MAX_LENGTH
        )));
    }
    Ok(())
}

fn validate_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
