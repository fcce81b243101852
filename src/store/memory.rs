use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::{validate_entry, EntryStore, StoreError, StoreResult};
use crate::models::mood_entry::{MoodEntry, NewMoodEntry};
use crate::models::user::UserId;

/// Process-local store. Data lives as long as the process.
#[derive(Clone, Default)]
pub struct MemoryEntryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    users: HashSet<UserId>,
    entries: Vec<MoodEntry>,
    next_id: i64,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn register_user(&self, user_id: UserId) -> StoreResult<()> {
        self.inner.lock().await.users.insert(user_id);
        Ok(())
    }

    async fn append(&self, entry: NewMoodEntry) -> StoreResult<MoodEntry> {
        validate_entry(&entry)?;

        let mut inner = self.inner.lock().await;
        if !inner.users.contains(&entry.user_id) {
            return Err(StoreError::UnknownUser(entry.user_id));
        }

        inner.next_id += 1;
        let stored = MoodEntry {
            id: inner.next_id,
            user_id: entry.user_id,
            mood_value: entry.mood_value,
            mood_label: entry.mood_label,
            day_name: entry.day_name,
            note: entry.note,
            logged_at: Utc::now(),
        };
        inner.entries.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, user_id: UserId) -> StoreResult<Vec<MoodEntry>> {
        let inner = self.inner.lock().await;
        let mut entries: Vec<MoodEntry> = inner
            .entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.logged_at.cmp(&a.logged_at).then(b.id.cmp(&a.id)));
        Ok(entries)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entry(user_id: UserId, mood_value: i32, label: &str, day: &str, note: &str) -> NewMoodEntry {
        NewMoodEntry {
            user_id,
            mood_value,
            mood_label: label.into(),
            day_name: day.into(),
            note: note.into(),
        }
    }

    #[tokio::test]
    async fn test_append_then_list_round_trip() {
        let store = MemoryEntryStore::new();
        store.register_user(42).await.unwrap();

        let written = store
            .append(new_entry(42, 5, "Great", "Friday", "good day"))
            .await
            .unwrap();

        let listed = store.list(42).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], written);
        assert_eq!(listed[0].mood_value, 5);
        assert_eq!(listed[0].mood_label, "Great");
        assert_eq!(listed[0].day_name, "Friday");
        assert_eq!(listed[0].note, "good day");
    }

    #[tokio::test]
    async fn test_list_without_entries_is_empty() {
        let store = MemoryEntryStore::new();
        store.register_user(7).await.unwrap();
        assert!(store.list(7).await.unwrap().is_empty());
        assert!(store.list(8).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_newest_first() {
        let store = MemoryEntryStore::new();
        store.register_user(1).await.unwrap();
        store.append(new_entry(1, 3, "Okay", "Monday", "")).await.unwrap();
        store.append(new_entry(1, 4, "Good", "Tuesday", "")).await.unwrap();
        let last = store.append(new_entry(1, 2, "Low", "Wednesday", "")).await.unwrap();

        let listed = store.list(1).await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].id, last.id);
        assert_eq!(listed[2].day_name, "Monday");
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_owner() {
        let store = MemoryEntryStore::new();
        store.register_user(1).await.unwrap();
        store.register_user(2).await.unwrap();
        store.append(new_entry(1, 5, "Great", "Friday", "mine")).await.unwrap();
        store.append(new_entry(2, 1, "Struggling", "Sunday", "theirs")).await.unwrap();

        let listed = store.list(1).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed.iter().all(|e| e.user_id == 1));
    }

    #[tokio::test]
    async fn test_unregistered_user_is_rejected_without_write() {
        let store = MemoryEntryStore::new();
        let err = store
            .append(new_entry(99, 5, "Great", "Friday", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownUser(99)));

        store.register_user(99).await.unwrap();
        assert!(store.list(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_is_idempotent() {
        let store = MemoryEntryStore::new();
        for _ in 0..3 {
            store.register_user(5).await.unwrap();
        }
        assert_eq!(store.inner.lock().await.users.len(), 1);
    }
}
