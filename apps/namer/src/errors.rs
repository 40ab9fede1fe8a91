use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::estimate::EstimateError;
use crate::layout::LayoutError;
use crate::naming::validation::ValidationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingFields(fields) => {
                AppError::MissingFields(fields.into_iter().map(str::to_string).collect())
            }
            other => AppError::Validation(other.to_string()),
        }
    }
}

impl From<EstimateError> for AppError {
    fn from(err: EstimateError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MissingFields(fields) => {
                let body = Json(json!({
                    "error": {
                        "code": "MISSING_FIELDS",
                        "message": "Please fill all required fields (*)",
                        "fields": fields,
                    }
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::Layout(e) => {
                tracing::warn!("Layout error: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "LAYOUT_ERROR",
                    e.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_conversion_keeps_names() {
        let err: AppError = ValidationError::MissingFields(vec!["date", "language"]).into();
        match err {
            AppError::MissingFields(fields) => assert_eq!(fields, vec!["date", "language"]),
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_choice_becomes_validation() {
        let err: AppError = ValidationError::InvalidChoice {
            field: "cadence",
            value: "48".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MissingFields(vec!["date".into()])
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Layout(LayoutError::PageTooNarrow {
                required: 100.0,
                available: 10.0
            })
            .into_response()
            .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
