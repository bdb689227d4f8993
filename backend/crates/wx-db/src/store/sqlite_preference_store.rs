use crate::{PreferenceStore, Result, SavedCityRepository, UserPreferenceRepository};

use wx_core::{PreferenceLookup, PreferenceView, UserPreference};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

/// SQLite-backed store. Every operation runs in a single transaction.
#[derive(Clone)]
pub struct SqlitePreferenceStore {
    pool: SqlitePool,
}

impl SqlitePreferenceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    async fn find_or_default(&self, user_id: &str) -> Result<PreferenceLookup> {
        let mut tx = self.pool.begin().await?;

        // Write first. A deferred transaction that reads and then writes fails with
        // SQLITE_BUSY_SNAPSHOT when another connection commits in between.
        let defaults = UserPreference::with_defaults(user_id);
        let created = UserPreferenceRepository::insert_if_absent(&mut *tx, &defaults).await?;

        let preference = UserPreferenceRepository::find_by_user_id(&mut *tx, user_id)
            .await?
            .unwrap_or(defaults);

        let cities = SavedCityRepository::find_by_user_id(&mut *tx, user_id)
            .await?
            .into_iter()
            .map(|city| city.city_name)
            .collect();

        tx.commit().await?;

        let view = preference.into_view(cities);
        Ok(match created {
            true => PreferenceLookup::Created(view),
            false => PreferenceLookup::Existing(view),
        })
    }

    async fn save(&self, user_id: &str, preferences: &PreferenceView) -> Result<()> {
        let now = Utc::now();
        let row = UserPreference {
            user_id: user_id.to_string(),
            default_city: preferences.default_city.clone(),
            temperature_unit: preferences.temperature_unit,
            notifications_enabled: preferences.notifications_enabled,
            created_at: now,
            updated_at: now,
        };
        let cities = preferences.distinct_saved_cities();

        // Dropping `tx` on any early return rolls everything back.
        let mut tx = self.pool.begin().await?;

        UserPreferenceRepository::upsert(&mut *tx, &row).await?;
        SavedCityRepository::delete_for_user(&mut *tx, user_id).await?;
        SavedCityRepository::insert_many(&mut *tx, user_id, &cities).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
