use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_INSIGHTS_BASE_URL, DEFAULT_INSIGHTS_ENABLED,
    DEFAULT_INSIGHTS_TIMEOUT_MS, MAX_INSIGHTS_TIMEOUT_MS, MIN_INSIGHTS_TIMEOUT_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Best-effort insights collaborator
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// When false the summary endpoint never calls out and returns `insights: null`
    pub enabled: bool,
    /// Base URL; `/insights` is appended
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_INSIGHTS_ENABLED,
            base_url: String::from(DEFAULT_INSIGHTS_BASE_URL),
            timeout_ms: DEFAULT_INSIGHTS_TIMEOUT_MS,
        }
    }
}

impl InsightsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::upstream(format!(
                "insights.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if self.timeout_ms < MIN_INSIGHTS_TIMEOUT_MS || self.timeout_ms > MAX_INSIGHTS_TIMEOUT_MS {
            return Err(ConfigError::upstream(format!(
                "insights.timeout_ms must be {}-{}, got {}",
                MIN_INSIGHTS_TIMEOUT_MS, MAX_INSIGHTS_TIMEOUT_MS, self.timeout_ms
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
