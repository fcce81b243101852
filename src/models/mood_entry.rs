use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::user::UserId;

/// One immutable journal record as stored.
///
/// `mood_label` is a snapshot taken at write time; it is never re-derived
/// from `mood_value` on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: i64,
    pub user_id: UserId,
    pub mood_value: i32,
    pub mood_label: String,
    pub day_name: String,
    pub note: String,
    pub logged_at: DateTime<Utc>,
}

/// Fields supplied by the writer. `id` and `logged_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMoodEntry {
    pub user_id: UserId,
    pub mood_value: i32,
    pub mood_label: String,
    pub day_name: String,
    #[serde(default)]
    pub note: String,
}
