//! Client for the upstream current-weather provider.

use crate::clients::{Result, UpstreamError, endpoint};

use wx_config::WeatherConfig;
use wx_core::WeatherReading;

use log::debug;
use reqwest::Url;
use serde_json::Value;

#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint(&config.base_url, "weather"),
            api_key: config.api_key.clone(),
        })
    }

    /// Current conditions for `city`, temperatures converted to Celsius.
    ///
    /// No retry. Transport errors, non-2xx statuses and bodies that are not
    /// JSON all come back as errors.
    pub async fn current(&self, city: &str) -> Result<WeatherReading> {
        let url = Url::parse_with_params(
            &self.endpoint,
            &[("q", city), ("appid", self.api_key.as_str())],
        )
        .map_err(|e| UpstreamError::invalid_url(&self.endpoint, e))?;

        debug!("Fetching weather for {:?}", city);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::status(status));
        }

        let payload: Value = response.json().await?;

        Ok(WeatherReading::from_kelvin(payload))
    }
}
