pub mod preferences;
pub mod save_preferences_request;
pub mod save_preferences_response;
