use crate::{DbError, Result as DbErrorResult};

use wx_core::{TemperatureUnit, UserPreference};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

#[derive(sqlx::FromRow)]
struct UserPreferenceRow {
    user_id: String,
    default_city: String,
    temperature_unit: String,
    notifications_enabled: bool,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserPreferenceRow> for UserPreference {
    type Error = DbError;

    fn try_from(r: UserPreferenceRow) -> DbErrorResult<Self> {
        Ok(UserPreference {
            temperature_unit: TemperatureUnit::from_str(&r.temperature_unit).map_err(|_| {
                DbError::InvalidRow {
                    message: format!("Invalid temperature_unit: {}", r.temperature_unit),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            created_at: DateTime::<Utc>::from_timestamp(r.created_at, 0).ok_or_else(|| {
                DbError::InvalidRow {
                    message: "Invalid created_at timestamp".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::<Utc>::from_timestamp(r.updated_at, 0).ok_or_else(|| {
                DbError::InvalidRow {
                    message: "Invalid updated_at timestamp".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            user_id: r.user_id,
            default_city: r.default_city,
            notifications_enabled: r.notifications_enabled,
        })
    }
}

pub struct UserPreferenceRepository;

impl UserPreferenceRepository {
    pub async fn find_by_user_id<'e, E>(
        executor: E,
        user_id: &str,
    ) -> DbErrorResult<Option<UserPreference>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserPreferenceRow>(
            r#"
            SELECT user_id, default_city, temperature_unit, notifications_enabled,
                   created_at, updated_at
            FROM user_preferences
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

        row.map(UserPreference::try_from).transpose()
    }

    /// Insert `preference` unless a row for the user already exists.
    ///
    /// Returns `true` when this call created the row.
    pub async fn insert_if_absent<'e, E>(
        executor: E,
        preference: &UserPreference,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
            INSERT INTO user_preferences (
                user_id, default_city, temperature_unit, notifications_enabled,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO NOTHING
            "#,
        )
        .bind(&preference.user_id)
        .bind(&preference.default_city)
        .bind(preference.temperature_unit.as_str())
        .bind(preference.notifications_enabled)
        .bind(preference.created_at.timestamp())
        .bind(preference.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Create or overwrite the scalar preference fields. `created_at` survives an overwrite.
    pub async fn upsert<'e, E>(executor: E, preference: &UserPreference) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO user_preferences (
                user_id, default_city, temperature_unit, notifications_enabled,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                default_city = excluded.default_city,
                temperature_unit = excluded.temperature_unit,
                notifications_enabled = excluded.notifications_enabled,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&preference.user_id)
        .bind(&preference.default_city)
        .bind(preference.temperature_unit.as_str())
        .bind(preference.notifications_enabled)
        .bind(preference.created_at.timestamp())
        .bind(preference.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }
}
