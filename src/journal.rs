//! The mood journal: log a mood, get the matching message, read history.
//!
//! Persistence and copy are injected, so the same component serves the
//! process-local and the database-backed deployments.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::messages::{Message, MessageTable};
use crate::models::mood::{Day, Mood};
use crate::models::mood_entry::{MoodEntry, NewMoodEntry};
use crate::models::user::UserId;
use crate::session::SessionId;
use crate::store::{EntryStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoodSubmission {
    pub day: Day,
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct LoggedMood {
    pub entry: MoodEntry,
    pub message: Message,
}

#[derive(Clone)]
pub struct Journal {
    store: Arc<dyn EntryStore>,
    messages: &'static MessageTable,
    in_flight: Arc<Mutex<HashSet<SessionId>>>,
}

impl Journal {
    pub fn new(store: Arc<dyn EntryStore>, messages: &'static MessageTable) -> Self {
        Self {
            store,
            messages,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn store(&self) -> &Arc<dyn EntryStore> {
        &self.store
    }

    pub fn message(&self, day: Day, mood: Mood) -> Message {
        self.messages.lookup(day, mood)
    }

    /// Appends one entry and returns it with the message for its (day, mood).
    ///
    /// At most one submission per session runs at a time; a second one is
    /// rejected rather than queued. Other sessions of the same user are not
    /// blocked.
    pub async fn log_mood(
        &self,
        session_id: SessionId,
        user_id: UserId,
        submission: MoodSubmission,
    ) -> Result<LoggedMood, JournalError> {
        let _slot = InFlight::claim(&self.in_flight, session_id)?;

        let entry = self
            .store
            .append(NewMoodEntry {
                user_id,
                mood_value: submission.mood.value(),
                mood_label: submission.mood.label().to_string(),
                day_name: submission.day.name().to_string(),
                note: submission.note,
            })
            .await?;

        tracing::info!(
            user_id = user_id,
            entry_id = entry.id,
            mood = entry.mood_value,
            day = %submission.day,
            "Mood logged"
        );

        Ok(LoggedMood {
            entry,
            message: self.message(submission.day, submission.mood),
        })
    }

    pub async fn history(&self, user_id: UserId) -> Result<Vec<MoodEntry>, JournalError> {
        Ok(self.store.list(user_id).await?)
    }
}

/// Marks a session's submission as pending until dropped.
struct InFlight<'a> {
    set: &'a Mutex<HashSet<SessionId>>,
    session_id: SessionId,
}

impl<'a> InFlight<'a> {
    fn claim(
        set: &'a Mutex<HashSet<SessionId>>,
        session_id: SessionId,
    ) -> Result<Self, JournalError> {
        let mut pending = set.lock().unwrap_or_else(|e| e.into_inner());
        if !pending.insert(session_id) {
            return Err(JournalError::SubmissionInFlight);
        }
        Ok(Self { set, session_id })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut pending = self.set.lock().unwrap_or_else(|e| e.into_inner());
        pending.remove(&self.session_id);
    }
}
