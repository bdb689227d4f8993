use crate::Result as DbErrorResult;

use wx_core::SavedCity;

use sqlx::{QueryBuilder, Sqlite};

pub struct SavedCityRepository;

impl SavedCityRepository {
    /// Saved cities for a user in the order they were written
    pub async fn find_by_user_id<'e, E>(
        executor: E,
        user_id: &str,
    ) -> DbErrorResult<Vec<SavedCity>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, (i64, String, String)>(
            r#"
            SELECT id, user_id, city_name
            FROM saved_cities
            WHERE user_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, user_id, city_name)| SavedCity {
                id,
                user_id,
                city_name,
            })
            .collect())
    }

    pub async fn delete_for_user<'e, E>(executor: E, user_id: &str) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM saved_cities WHERE user_id = ?")
            .bind(user_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Insert all `city_names` for the user in one statement. Names must already be distinct.
    pub async fn insert_many<'e, E>(
        executor: E,
        user_id: &str,
        city_names: &[&str],
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        if city_names.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("INSERT INTO saved_cities (user_id, city_name) ");
        builder.push_values(city_names, |mut row, city_name| {
            row.push_bind(user_id).push_bind(*city_name);
        });

        let result = builder.build().execute(executor).await?;

        Ok(result.rows_affected())
    }
}
