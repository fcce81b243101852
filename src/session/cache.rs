use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;
use uuid::Uuid;

pub type SessionId = Uuid;

/// Session-scoped slot holding the resolved user id as a string.
///
/// Slots idle-expire after `ttl`; reading a slot refreshes it.
#[derive(Clone)]
pub struct SessionCache {
    slots: Arc<Mutex<HashMap<SessionId, Slot>>>,
    ttl: Duration,
}

struct Slot {
    user_id: String,
    last_seen: Instant,
}

impl SessionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn get(&self, session_id: &SessionId) -> Option<String> {
        let mut slots = self.slots.lock().await;
        let now = Instant::now();

        let slot = slots.get_mut(session_id)?;
        if now.duration_since(slot.last_seen) > self.ttl {
            slots.remove(session_id);
            return None;
        }
        slot.last_seen = now;
        Some(slot.user_id.clone())
    }

    pub async fn set(&self, session_id: SessionId, user_id: String) {
        self.slots.lock().await.insert(
            session_id,
            Slot {
                user_id,
                last_seen: Instant::now(),
            },
        );
    }

    /// Returns whether a slot was present.
    pub async fn clear(&self, session_id: &SessionId) -> bool {
        self.slots.lock().await.remove(session_id).is_some()
    }

    /// Drops expired slots. Returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let mut slots = self.slots.lock().await;
        let now = Instant::now();
        let before = slots.len();
        slots.retain(|_, slot| now.duration_since(slot.last_seen) <= self.ttl);
        before - slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_clear() {
        let cache = SessionCache::new(Duration::from_secs(60));
        let sid = Uuid::new_v4();

        assert_eq!(cache.get(&sid).await, None);
        cache.set(sid, "42".into()).await;
        assert_eq!(cache.get(&sid).await.as_deref(), Some("42"));

        assert!(cache.clear(&sid).await);
        assert_eq!(cache.get(&sid).await, None);
        assert!(!cache.clear(&sid).await);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let cache = SessionCache::new(Duration::from_secs(60));
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        cache.set(a, "1".into()).await;
        cache.set(b, "2".into()).await;
        assert_eq!(cache.get(&a).await.as_deref(), Some("1"));
        assert_eq!(cache.get(&b).await.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_expired_slots_are_dropped() {
        let cache = SessionCache::new(Duration::from_millis(20));
        let sid = Uuid::new_v4();
        cache.set(sid, "42".into()).await;
        cache.set(Uuid::new_v4(), "43".into()).await;

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(cache.purge_expired().await, 2);
        assert_eq!(cache.get(&sid).await, None);
    }
}
