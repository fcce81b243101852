use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::messages::Message;
use crate::models::mood::{Day, Mood, Vocabulary};
use crate::AppState;

pub async fn get_vocabulary() -> Json<Vocabulary> {
    Json(Vocabulary::current())
}

pub async fn get_message(
    State(state): State<AppState>,
    Path((day, mood)): Path<(String, i32)>,
) -> AppResult<Json<Message>> {
    let day = day
        .parse::<Day>()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let mood = Mood::from_value(mood)
        .ok_or_else(|| AppError::Validation("Mood must be between 1 and 5".into()))?;

    Ok(Json(state.journal.message(day, mood)))
}
