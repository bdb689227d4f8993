use crate::{CliClientResult, ClientError};

use wx_core::PreferenceView;

use reqwest::{Client as ReqwestClient, Method, Url};
use serde_json::Value;

/// HTTP client for the wx-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:5000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Build a request carrying `?city=`, percent-encoded
    fn request_with_city(
        &self,
        method: Method,
        path: &str,
        city: &str,
    ) -> CliClientResult<reqwest::RequestBuilder> {
        let url = format!("{}{}", self.base_url, path);
        let url = Url::parse_with_params(&url, &[("city", city)])
            .map_err(|e| ClientError::invalid_url(&url, e))?;
        Ok(self.client.request(method, url))
    }

    /// Execute request and turn error bodies into `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            let code = body
                .get("code")
                .and_then(Value::as_str)
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .map(String::from)
                .unwrap_or_else(|| format!("Server returned {}", status));
            return Err(ClientError::api_error(status.as_u16(), code, message));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // Weather
    // =========================================================================

    /// Current weather for a city, temperatures in Celsius
    pub async fn get_weather(&self, city: &str) -> CliClientResult<Value> {
        let req = self.request_with_city(Method::GET, "/api/weather", city)?;
        self.execute(req).await
    }

    /// Condensed weather summary with optional insights
    pub async fn get_summary(&self, city: &str) -> CliClientResult<Value> {
        let req = self.request_with_city(Method::GET, "/api/weather/summary", city)?;
        self.execute(req).await
    }

    // =========================================================================
    // Preferences
    // =========================================================================

    pub async fn get_preferences(&self, user_id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &Self::preferences_path(user_id));
        self.execute(req).await
    }

    /// Replace a user's preferences
    pub async fn save_preferences(
        &self,
        user_id: &str,
        preferences: &PreferenceView,
    ) -> CliClientResult<Value> {
        let req = self
            .request(Method::PUT, &Self::preferences_path(user_id))
            .json(preferences);
        self.execute(req).await
    }

    pub(crate) fn preferences_path(user_id: &str) -> String {
        let mut url = match Url::parse("http://localhost/api/preferences/") {
            Ok(url) => url,
            Err(_) => return format!("/api/preferences/{}", user_id),
        };
        // Percent-encode the id as a single path segment
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(user_id);
        }
        url.path().to_string()
    }
}
