use wx_core::{Insights, WeatherReading};

use serde::Serialize;

/// Reading plus best-effort insights; `insights` is `null` when unavailable
#[derive(Debug, Serialize)]
pub struct WeatherSummaryResponse {
    pub weather: WeatherReading,
    pub insights: Option<Insights>,
}
