use axum::{extract::State, Extension, Json};
use validator::Validate;

use crate::auth::middleware::SessionUser;
use crate::dto::LogMoodRequest;
use crate::error::{AppError, AppResult};
use crate::journal::LoggedMood;
use crate::models::mood_entry::MoodEntry;
use crate::AppState;

pub async fn log_mood(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
    Json(body): Json<LogMoodRequest>,
) -> AppResult<Json<LoggedMood>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let logged = state
        .journal
        .log_mood(session.session_id, session.user_id, body.into())
        .await?;
    Ok(Json(logged))
}

/// History for the session's user, newest first.
pub async fn list_entries(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let entries = state.journal.history(session.user_id).await?;
    Ok(Json(entries))
}
