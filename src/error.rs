use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    repository::RepositoryError,
    response::{ErrorBody, ValidationProblem},
    validation,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("{0}")]
    UpdateRejected(String),

    #[error("The HTTP resource that matches the request URI '{0}' is not supported.")]
    RouteNotRecognized(String),

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => AppError::NotFound,
            RepositoryError::Rejected(message) => AppError::UpdateRejected(message),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Validation(errors) => {
                tracing::debug!(
                    errors = %validation::messages(errors).join(", "),
                    "request validation failed"
                );
                (StatusCode::BAD_REQUEST, Json(ValidationProblem::from(errors))).into_response()
            }
            AppError::UpdateRejected(message) => (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                message.clone(),
            )
                .into_response(),
            AppError::RouteNotRecognized(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new("UnsupportedApiVersion", self.to_string())),
            )
                .into_response(),
            AppError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new("BadRequest", self.to_string())),
            )
                .into_response(),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new("InternalServerError", self.to_string())),
                )
                    .into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_http_errors() {
        assert!(matches!(
            AppError::from(RepositoryError::NotFound),
            AppError::NotFound
        ));
        match AppError::from(RepositoryError::Rejected("locked".into())) {
            AppError::UpdateRejected(message) => assert_eq!(message, "locked"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::UpdateRejected("no".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::RouteNotRecognized("/v2/Product/1".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Validation(ValidationErrors::new())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
