//! REST API error types
//!
//! Every failure leaves a handler as an `ApiError` and is rendered as
//! `{"error": ..., "code": ..., "field": ...}` with a matching status.

use crate::clients::UpstreamError;

use wx_core::CoreError;
use wx_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const WEATHER_UNAVAILABLE_MESSAGE: &str = "Failed to fetch weather data";
pub const STORAGE_FAILURE_MESSAGE: &str = "Failed to process preferences";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub code: &'static str,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Upstream provider failed (502)
    #[error("Upstream unavailable: {message} {location}")]
    UpstreamUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::UpstreamUnavailable { .. } => "UPSTREAM_UNAVAILABLE",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        // Client mistakes are routine, server-side failures are not
        match status {
            StatusCode::BAD_REQUEST => log::warn!("{}", self),
            _ => log::error!("{}", self),
        }

        let (error, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::UpstreamUnavailable { message, .. } => (message, None),
            ApiError::Internal { message, .. } => (message, None),
        };

        (status, Json(ApiErrorResponse { error, code, field })).into_response()
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidTemperatureUnit { value, .. } => ApiError::Validation {
                message: format!(
                    "Invalid temperature unit '{}' (expected celsius or fahrenheit)",
                    value
                ),
                field: Some("temperatureUnit".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: STORAGE_FAILURE_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert weather provider errors to API errors
impl From<UpstreamError> for ApiError {
    #[track_caller]
    fn from(e: UpstreamError) -> Self {
        log::warn!("Weather provider error: {}", e);
        ApiError::UpstreamUnavailable {
            message: WEATHER_UNAVAILABLE_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
