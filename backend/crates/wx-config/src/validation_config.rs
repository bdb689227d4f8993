use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_USER_ID_LENGTH: usize = 1;
pub const MAX_USER_ID_LENGTH: usize = 255;
pub const DEFAULT_MAX_USER_ID_LENGTH: usize = 255;

pub const MIN_CITY_LENGTH: usize = 1;
pub const MAX_CITY_LENGTH: usize = 255;
pub const DEFAULT_MAX_CITY_LENGTH: usize = 255;

pub const MAX_SAVED_CITIES: usize = 1000;
pub const DEFAULT_MAX_SAVED_CITIES: usize = 50;

/// Field limits applied to incoming requests before any upstream or storage call.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length of a user id path segment
    pub max_user_id_length: usize,
    /// Maximum length of a city name (search or saved)
    pub max_city_length: usize,
    /// Maximum number of saved cities per user
    pub max_saved_cities: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_user_id_length: DEFAULT_MAX_USER_ID_LENGTH,
            max_city_length: DEFAULT_MAX_CITY_LENGTH,
            max_saved_cities: DEFAULT_MAX_SAVED_CITIES,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_user_id_length < MIN_USER_ID_LENGTH
            || self.max_user_id_length > MAX_USER_ID_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_user_id_length must be {}-{}, got {}",
                MIN_USER_ID_LENGTH, MAX_USER_ID_LENGTH, self.max_user_id_length
            )));
        }

        if self.max_city_length < MIN_CITY_LENGTH || self.max_city_length > MAX_CITY_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_city_length must be {}-{}, got {}",
                MIN_CITY_LENGTH, MAX_CITY_LENGTH, self.max_city_length
            )));
        }

        if self.max_saved_cities > MAX_SAVED_CITIES {
            return Err(ConfigError::config(format!(
                "validation.max_saved_cities must be at most {}, got {}",
                MAX_SAVED_CITIES, self.max_saved_cities
            )));
        }

        Ok(())
    }
}
