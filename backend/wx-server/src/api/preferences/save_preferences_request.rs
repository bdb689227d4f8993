use crate::{ApiError, ApiResult};
use crate::api::validation::{limit_length, require_text};

use wx_config::ValidationConfig;
use wx_core::{PreferenceView, TemperatureUnit};

use std::str::FromStr;

use serde::Deserialize;

/// Body of PUT/POST /api/preferences/{user_id}. Every field is optional.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SavePreferencesRequest {
    pub default_city: Option<String>,
    pub temperature_unit: Option<String>,
    pub saved_cities: Option<Vec<String>>,
    pub notifications_enabled: Option<bool>,
}

impl SavePreferencesRequest {
    /// Validate and normalize into the stored shape.
    ///
    /// Missing fields take their defaults, city names are trimmed and
    /// duplicate saved cities collapse to their first occurrence.
    pub fn into_view(self, limits: &ValidationConfig) -> ApiResult<PreferenceView> {
        let default_city = self.default_city.unwrap_or_default().trim().to_string();
        limit_length("defaultCity", &default_city, limits.max_city_length)?;

        let temperature_unit = match self.temperature_unit {
            Some(unit) => TemperatureUnit::from_str(&unit)?,
            None => TemperatureUnit::default(),
        };

        let saved_cities = self
            .saved_cities
            .unwrap_or_default()
            .iter()
            .map(|city| {
                require_text("savedCities", Some(city.as_str()), limits.max_city_length)
            })
            .collect::<ApiResult<Vec<String>>>()?;

        let view = PreferenceView {
            default_city,
            temperature_unit,
            saved_cities,
            notifications_enabled: self.notifications_enabled.unwrap_or(false),
        }
        .normalized();

        if view.saved_cities.len() > limits.max_saved_cities {
            return Err(ApiError::validation(
                "savedCities",
                format!(
                    "savedCities may hold at most {} cities",
                    limits.max_saved_cities
                ),
            ));
        }

        Ok(view)
    }
}
