use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_WEATHER_BASE_URL, DEFAULT_WEATHER_TIMEOUT_SECS,
    MAX_WEATHER_TIMEOUT_SECS, MIN_WEATHER_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Upstream weather provider (OpenWeatherMap-compatible)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Base URL; `/weather` is appended
    pub base_url: String,
    /// Provider API key. Never logged.
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_WEATHER_BASE_URL),
            api_key: String::new(),
            timeout_secs: DEFAULT_WEATHER_TIMEOUT_SECS,
        }
    }
}

impl WeatherConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::upstream(format!(
                "weather.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_WEATHER_TIMEOUT_SECS
            || self.timeout_secs > MAX_WEATHER_TIMEOUT_SECS
        {
            return Err(ConfigError::upstream(format!(
                "weather.timeout_secs must be {}-{}, got {}",
                MIN_WEATHER_TIMEOUT_SECS, MAX_WEATHER_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key with everything but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        match chars.len() {
            0 => String::from("<unset>"),
            n if n <= 4 => "*".repeat(n),
            n => {
                let tail: String = chars[n - 4..].iter().collect();
                format!("{}{}", "*".repeat(n - 4), tail)
            }
        }
    }
}
