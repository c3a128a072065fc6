use axum::extract::{FromRequestParts, OriginalUri, Path};
use axum::http::request::Parts;

use crate::error::AppError;

/// Product id taken from the `{id}` path segment.
///
/// Only positive integers match; anything else is treated as an unsupported
/// route rather than a missing product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i32);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|original| original.0.path().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::RouteNotRecognized(uri.clone()))?;

        match raw.parse::<i32>() {
            Ok(id) if id >= 1 => Ok(ProductId(id)),
            _ => Err(AppError::RouteNotRecognized(uri)),
        }
    }
}
