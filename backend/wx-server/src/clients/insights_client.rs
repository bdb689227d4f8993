//! Client for the insights collaborator.

use crate::clients::{Result, UpstreamError, endpoint};

use wx_config::InsightsConfig;
use wx_core::Insights;

use reqwest::Url;

#[derive(Clone)]
pub struct InsightsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl InsightsClient {
    pub fn new(config: &InsightsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint(&config.base_url, "insights"),
        })
    }

    pub async fn fetch(&self, city: &str, temp_celsius: f64, conditions: &str) -> Result<Insights> {
        let temp = temp_celsius.to_string();
        let url = Url::parse_with_params(
            &self.endpoint,
            &[("city", city), ("temp", temp.as_str()), ("conditions", conditions)],
        )
        .map_err(|e| UpstreamError::invalid_url(&self.endpoint, e))?;

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::status(status));
        }

        Ok(response.json::<Insights>().await?)
    }
}
