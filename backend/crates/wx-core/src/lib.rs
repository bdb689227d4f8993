pub mod error;
pub mod insights;
pub mod models;
pub mod units;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use insights::weather_category::WeatherCategory;
pub use models::insights::Insights;
pub use models::preference_lookup::PreferenceLookup;
pub use models::preference_view::PreferenceView;
pub use models::saved_city::SavedCity;
pub use models::temperature_unit::TemperatureUnit;
pub use models::user_preference::UserPreference;
pub use models::weather_reading::WeatherReading;
