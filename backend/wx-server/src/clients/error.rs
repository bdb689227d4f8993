use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure talking to an upstream HTTP collaborator
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Request failed: {source} {location}")]
    Request {
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Upstream returned HTTP {status} {location}")]
    Status {
        status: u16,
        location: ErrorLocation,
    },

    #[error("Invalid URL {url}: {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },
}

impl UpstreamError {
    #[track_caller]
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url(url: &str, error: impl std::fmt::Display) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the request gave up waiting
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request { source, .. } if source.is_timeout())
    }
}

impl From<reqwest::Error> for UpstreamError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Request {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, UpstreamError>;
