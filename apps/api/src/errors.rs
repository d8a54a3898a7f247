use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures raised by the scoring core. All of them are local and recoverable:
/// the caller re-prompts the candidate, nothing here is fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AssessmentError> for AppError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::InvalidSubmission(msg) => AppError::InvalidSubmission(msg),
            AssessmentError::UnknownCategory(name) => {
                AppError::NotFound(format!("Category '{name}' not found"))
            }
        }
    }
}

/// A submission body that is not JSON, or not the expected shape, is a
/// rejected submission like any other.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected submission body: {}", rejection.body_text());
        AppError::InvalidSubmission(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidSubmission(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_SUBMISSION",
                msg.clone(),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
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
    fn test_invalid_submission_maps_to_422() {
        let err: AppError = AssessmentError::InvalidSubmission("bad tally".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_unknown_category_maps_to_404() {
        let err: AppError = AssessmentError::UnknownCategory("coding".into()).into();
        match &err {
            AppError::NotFound(msg) => assert!(msg.contains("coding")),
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        assert_eq!(
            AppError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
