//! Request/response bodies that are not plain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::journal::MoodSubmission;
use crate::models::mood::{Day, Mood};

/// POST /api/session/bootstrap
#[derive(Debug, Deserialize, Validate)]
pub struct BootstrapRequest {
    /// Address the widget was loaded from, including any `token` parameter.
    #[validate(url(message = "page_url must be an absolute URL"))]
    #[validate(length(max = 2048, message = "page_url too long"))]
    pub page_url: String,
}

/// POST /api/entries
#[derive(Debug, Deserialize, Validate)]
pub struct LogMoodRequest {
    pub day: Day,
    pub mood: Mood,
    #[serde(default)]
    #[validate(length(max = 1000, message = "Note must be at most 1000 characters"))]
    pub note: String,
}

impl From<LogMoodRequest> for MoodSubmission {
    fn from(req: LogMoodRequest) -> Self {
        Self {
            day: req.day,
            mood: req.mood,
            note: req.note,
        }
    }
}

/// DELETE /api/session
#[derive(Debug, Serialize)]
pub struct SessionClearedResponse {
    pub cleared: bool,
}
