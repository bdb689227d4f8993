//! Query-string extractor that rejects with the API error shape

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Query::<T>::from_request_parts(parts, state).await {
                Ok(Query(value)) => Ok(QueryParams(value)),
                Err(rejection) => Err(ApiError::Validation {
                    message: format!("Invalid query string: {}", rejection.body_text()),
                    field: None,
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}
