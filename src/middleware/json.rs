use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::{error::AppError, validation::ValidateVersioned, version::ApiVersion};

/// `axum::Json` whose rejections are reported as [`AppError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// JSON body checked against its validation rules for the requested API
/// version before the handler runs.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidateVersioned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let version = req
            .extensions()
            .get::<ApiVersion>()
            .copied()
            .unwrap_or_default();

        let AppJson(data) = AppJson::<T>::from_request(req, state).await?;
        data.validate_for(version).map_err(AppError::Validation)?;

        Ok(ValidatedJson(data))
    }
}
