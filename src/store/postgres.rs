use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{validate_entry, EntryStore, StoreError, StoreResult};
use crate::models::mood_entry::{MoodEntry, NewMoodEntry};
use crate::models::user::UserId;

#[derive(Clone)]
pub struct PgEntryStore {
    db: PgPool,
}

impl PgEntryStore {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let db = PgPoolOptions::new()
            .max_connections(20)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;
        Ok(Self { db })
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.db).await
    }
}

#[async_trait]
impl EntryStore for PgEntryStore {
    async fn register_user(&self, user_id: UserId) -> StoreResult<()> {
        sqlx::query("INSERT INTO users (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(user_id)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    async fn append(&self, entry: NewMoodEntry) -> StoreResult<MoodEntry> {
        validate_entry(&entry)?;

        let result = sqlx::query_as::<_, MoodEntry>(
            r#"
            INSERT INTO mood_entries (user_id, mood_value, mood_label, day_name, note)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, mood_value, mood_label, day_name, note, logged_at
            "#,
        )
        .bind(entry.user_id)
        .bind(entry.mood_value)
        .bind(&entry.mood_label)
        .bind(&entry.day_name)
        .bind(&entry.note)
        .fetch_one(&self.db)
        .await;

        match result {
            Ok(stored) => Ok(stored),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(StoreError::UnknownUser(entry.user_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self, user_id: UserId) -> StoreResult<Vec<MoodEntry>> {
        let entries = sqlx::query_as::<_, MoodEntry>(
            r#"
            SELECT id, user_id, mood_value, mood_label, day_name, note, logged_at
            FROM mood_entries
            WHERE user_id = $1
            ORDER BY logged_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db)
            .await?;
        Ok(())
    }
}
