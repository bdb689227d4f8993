pub mod saved_city_repository;
pub mod user_preference_repository;
