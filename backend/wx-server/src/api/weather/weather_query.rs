use serde::Deserialize;

/// `?city=` for the weather endpoints
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WeatherQuery {
    pub city: Option<String>,
}
