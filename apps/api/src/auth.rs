use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;

/// Header carrying the identity established by the upstream auth layer.
pub const PRINCIPAL_HEADER: &str = "x-principal-id";

/// The authenticated caller. Requests without a usable identity never reach a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(PRINCIPAL_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| Principal(id.to_string()))
            .ok_or(AppError::Unauthorized)
    }
}
