//! Local insights endpoint

use crate::{ApiError, ApiResult, InsightsQuery, QueryParams};

use wx_core::insights::generate_insights;
use wx_core::{Insights, WeatherCategory};

use axum::Json;
use log::debug;

/// GET /insights?city=&temp=&conditions=
///
/// Advisory text for the given conditions. Missing parameters take their
/// defaults (empty city, 0 °C, clear skies).
pub async fn get_insights(
    QueryParams(query): QueryParams<InsightsQuery>,
) -> ApiResult<Json<Insights>> {
    let city = query.city.unwrap_or_default();
    let temp = parse_temp(query.temp.as_deref())?;
    let conditions = query.conditions.unwrap_or_default();
    let category = WeatherCategory::from_conditions(&conditions);

    debug!(
        "GET insights city={} temp={} conditions={:?} category={}",
        city, temp, conditions, category
    );

    Ok(Json(generate(&city, temp, category)))
}

fn generate(city: &str, temp: f64, category: WeatherCategory) -> Insights {
    generate_insights(&mut rand::rng(), city, temp, category)
}

/// Missing or blank means 0; anything else must be a finite number
pub fn parse_temp(raw: Option<&str>) -> ApiResult<f64> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Ok(0.0);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ApiError::validation(
            "temp",
            format!("temp must be a number, got '{}'", raw),
        )),
    }
}
