use wx_core::{PreferenceView, TemperatureUnit};
use wx_db::SqlitePreferenceStore;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    wx_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub async fn create_test_store() -> (SqlitePreferenceStore, SqlitePool) {
    let pool = create_test_pool().await;
    (SqlitePreferenceStore::new(pool.clone()), pool)
}

/// File-backed store with a multi-connection pool, as in production
#[allow(dead_code)]
pub async fn create_file_store(
    dir: &tempfile::TempDir,
    max_connections: u32,
) -> (SqlitePreferenceStore, SqlitePool) {
    let pool = wx_db::connect(&dir.path().join("weather.db"), max_connections)
        .await
        .expect("Failed to create file pool");
    (SqlitePreferenceStore::new(pool.clone()), pool)
}

#[allow(dead_code)]
pub fn preferences(default_city: &str, unit: TemperatureUnit, cities: &[&str]) -> PreferenceView {
    PreferenceView {
        default_city: default_city.to_string(),
        temperature_unit: unit,
        saved_cities: cities.iter().map(|c| c.to_string()).collect(),
        notifications_enabled: false,
    }
}

/// Makes any insert of `city_name` into saved_cities abort the statement
#[allow(dead_code)]
pub async fn reject_saved_city(pool: &SqlitePool, city_name: &str) {
    let sql = format!(
        "CREATE TRIGGER reject_city BEFORE INSERT ON saved_cities \
         WHEN NEW.city_name = '{}' \
         BEGIN SELECT RAISE(ABORT, 'rejected'); END",
        city_name.replace('\'', "''")
    );

    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query(&sql)
        .execute(pool)
        .await
        .expect("Failed to create trigger");
}

#[allow(dead_code)]
pub async fn count_rows(pool: &SqlitePool, table: &str, user_id: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {} WHERE user_id = ?", table);
    sqlx::query_scalar::<_, i64>(&sql)
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

/// Delete a user's preference row; saved cities go with it through the FK cascade
#[allow(dead_code)]
pub async fn delete_user(pool: &SqlitePool, user_id: &str) -> u64 {
    sqlx::query("DELETE FROM user_preferences WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("Failed to delete user")
        .rows_affected()
}
