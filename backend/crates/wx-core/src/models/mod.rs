pub mod insights;
pub mod preference_lookup;
pub mod preference_view;
pub mod saved_city;
pub mod temperature_unit;
pub mod user_preference;
pub mod weather_reading;
