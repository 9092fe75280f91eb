use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{FieldErrorDto, ValidationErrorDto};

pub const NOT_BLANK: &str = "must not be blank";

/// A rejected field of an incoming request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// JSON name of the field
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// One or more fields of a request body broke their constraints.
///
/// Results in a 400 Bad Request listing every offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid fields: {}", field_names(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

fn field_names(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| f.field)
        .collect::<Vec<_>>()
        .join(", ")
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                error: "One or more parameters are incorrect, check and try again.".to_string(),
                fields: self
                    .fields
                    .into_iter()
                    .map(|f| FieldErrorDto {
                        field: f.field.to_string(),
                        message: f.message,
                    })
                    .collect(),
            }),
        )
            .into_response()
    }
}
