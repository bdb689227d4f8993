//! UserPreference entity - one row per user, created lazily on first read.

use crate::{PreferenceView, TemperatureUnit};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreference {
    /// Opaque identity supplied by the client
    pub user_id: String,
    /// May be empty
    pub default_city: String,
    pub temperature_unit: TemperatureUnit,
    pub notifications_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserPreference {
    /// Create the default record for a user seen for the first time
    pub fn with_defaults(user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            default_city: String::new(),
            temperature_unit: TemperatureUnit::default(),
            notifications_enabled: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Combine this row with the user's saved cities
    pub fn into_view(self, saved_cities: Vec<String>) -> PreferenceView {
        PreferenceView {
            default_city: self.default_city,
            temperature_unit: self.temperature_unit,
            saved_cities,
            notifications_enabled: self.notifications_enabled,
        }
    }
}
