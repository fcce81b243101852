//! Append-only persistence for mood entries.

use async_trait::async_trait;

use crate::models::mood::{Day, Mood};
use crate::models::mood_entry::{MoodEntry, NewMoodEntry};
use crate::models::user::UserId;

pub mod memory;
pub mod postgres;

pub use memory::MemoryEntryStore;
pub use postgres::PgEntryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("User {0} is not registered")]
    UnknownUser(UserId),

    #[error("Invalid entry: {0}")]
    Validation(String),

    #[error("Store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Idempotent upsert keyed by id. Safe to call concurrently for the same id.
    async fn register_user(&self, user_id: UserId) -> StoreResult<()>;

    /// Writes one entry. Nothing is written on error.
    async fn append(&self, entry: NewMoodEntry) -> StoreResult<MoodEntry>;

    /// All entries owned by `user_id`, newest `logged_at` first.
    async fn list(&self, user_id: UserId) -> StoreResult<Vec<MoodEntry>>;

    async fn ping(&self) -> StoreResult<()>;
}

/// Checks an entry against the fixed vocabularies before it is written.
pub fn validate_entry(entry: &NewMoodEntry) -> StoreResult<()> {
    let mood = Mood::from_value(entry.mood_value).ok_or_else(|| {
        StoreError::Validation(format!(
            "Mood must be between 1 and 5, got {}",
            entry.mood_value
        ))
    })?;
    if Mood::from_label(&entry.mood_label) != Some(mood) {
        return Err(StoreError::Validation(format!(
            "Label '{}' does not match mood {}",
            entry.mood_label, entry.mood_value
        )));
    }
    entry
        .day_name
        .parse::<Day>()
        .map_err(|e| StoreError::Validation(e.to_string()))?;
    // Postgres TEXT cannot hold NUL; reject it for every store alike.
    if entry.note.contains('\0') {
        return Err(StoreError::Validation(
            "Note must not contain NUL characters".into(),
        ));
    }
    Ok(())
}
