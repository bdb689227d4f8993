pub mod api;
pub mod app_state;
pub mod clients;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_log;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::{json_body::JsonBody, query_params::QueryParams},
    insights::{insights::get_insights, insights_query::InsightsQuery},
    preferences::{
        preferences::{get_preferences, save_preferences},
        save_preferences_request::SavePreferencesRequest,
        save_preferences_response::SavePreferencesResponse,
    },
    weather::{
        weather::{get_weather, get_weather_summary},
        weather_query::WeatherQuery,
        weather_summary_response::WeatherSummaryResponse,
    },
};
pub use app_state::AppState;
pub use clients::{InsightsClient, UpstreamError, WeatherClient};
pub use error::ServerError;

pub use crate::routes::build_router;
