//! JSON body extractor that rejects with the API error shape

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but a malformed or missing body becomes a 400
/// `VALIDATION_ERROR` instead of axum's plain-text rejection.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonBody(value)),
                Err(rejection) => Err(ApiError::Validation {
                    message: format!("Invalid request body: {}", rejection.body_text()),
                    field: None,
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}
