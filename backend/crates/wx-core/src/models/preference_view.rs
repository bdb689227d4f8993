//! Externally visible shape of a user's stored preferences.

use crate::TemperatureUnit;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Preference row plus the user's saved cities, as clients see them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceView {
    pub default_city: String,
    pub temperature_unit: TemperatureUnit,
    pub saved_cities: Vec<String>,
    pub notifications_enabled: bool,
}

impl PreferenceView {
    /// Saved cities with duplicates removed, first occurrence wins.
    pub fn distinct_saved_cities(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.saved_cities.len());
        self.saved_cities
            .iter()
            .map(String::as_str)
            .filter(|city| seen.insert(*city))
            .collect()
    }

    /// Same preferences with the saved-cities list de-duplicated
    pub fn normalized(&self) -> Self {
        Self {
            saved_cities: self
                .distinct_saved_cities()
                .into_iter()
                .map(String::from)
                .collect(),
            ..self.clone()
        }
    }
}
