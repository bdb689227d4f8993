//! Weather REST API handlers

use crate::api::validation::require_text;
use crate::{ApiResult, AppState, QueryParams, WeatherQuery, WeatherSummaryResponse};

use wx_core::{Insights, WeatherReading};

use axum::{Json, extract::State};
use log::{debug, warn};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/weather?city=
///
/// Current conditions with temperatures in Celsius
pub async fn get_weather(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<WeatherQuery>,
) -> ApiResult<Json<WeatherReading>> {
    let city = require_text("city", query.city.as_deref(), state.validation.max_city_length)?;
    debug!("GET weather city={}", city);

    let reading = state.weather.current(&city).await?;

    Ok(Json(reading))
}

/// GET /api/weather/summary?city=
///
/// Current conditions plus insights when the insights service answers in time
pub async fn get_weather_summary(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<WeatherQuery>,
) -> ApiResult<Json<WeatherSummaryResponse>> {
    let city = require_text("city", query.city.as_deref(), state.validation.max_city_length)?;
    debug!("GET weather summary city={}", city);

    let weather = state.weather.current(&city).await?;
    let insights = fetch_insights(&state, &city, &weather).await;

    Ok(Json(WeatherSummaryResponse { weather, insights }))
}

// =============================================================================
// Helpers
// =============================================================================

/// Never fails: every problem is logged and turns into `None`
async fn fetch_insights(state: &AppState, city: &str, weather: &WeatherReading) -> Option<Insights> {
    let client = state.insights.as_ref()?;

    let Some(temp) = weather.temp() else {
        debug!("Reading for {} has no main.temp, skipping insights", city);
        return None;
    };
    let conditions = weather.condition().unwrap_or_default();

    match client.fetch(city, temp, conditions).await {
        Ok(insights) => Some(insights),
        Err(e) if e.is_timeout() => {
            warn!("Insights request for {} timed out", city);
            None
        }
        Err(e) => {
            warn!("Insights unavailable for {}: {}", city, e);
            None
        }
    }
}
