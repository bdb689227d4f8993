use crate::clients::{InsightsClient, WeatherClient};

use wx_config::ValidationConfig;
use wx_db::PreferenceStore;

use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PreferenceStore>,
    pub weather: WeatherClient,
    /// `None` when insights are disabled in config
    pub insights: Option<InsightsClient>,
    pub validation: ValidationConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        weather: WeatherClient,
        insights: Option<InsightsClient>,
        validation: ValidationConfig,
    ) -> Self {
        Self {
            store,
            weather,
            insights,
            validation,
        }
    }
}
