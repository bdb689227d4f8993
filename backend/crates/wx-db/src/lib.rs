pub mod connection;
pub mod error;
pub mod repositories;
pub mod store;

#[cfg(test)]
mod tests;

pub use connection::{MIGRATOR, connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::saved_city_repository::SavedCityRepository;
pub use repositories::user_preference_repository::UserPreferenceRepository;
pub use store::PreferenceStore;
pub use store::memory_preference_store::InMemoryPreferenceStore;
pub use store::sqlite_preference_store::SqlitePreferenceStore;
