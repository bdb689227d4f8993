pub mod error;
pub mod insights_client;
pub mod weather_client;

pub use error::{Result, UpstreamError};
pub use insights_client::InsightsClient;
pub use weather_client::WeatherClient;

/// Join a configured base URL and a path segment without doubling slashes
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
