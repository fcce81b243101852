use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::journal::JournalError;
use crate::session::Throttled;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{0}")]
    RateLimited(#[from] Throttled),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<JournalError> for AppError {
    fn from(e: JournalError) -> Self {
        match e {
            JournalError::SubmissionInFlight => AppError::Conflict(e.to_string()),
            JournalError::Store(e) => AppError::Store(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let retry_after = match &self {
            AppError::RateLimited(t) => Some(t.retry_after.as_secs().max(1)),
            _ => None,
        };

        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::RateLimited(_) => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            AppError::Store(StoreError::Validation(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            AppError::Store(e @ StoreError::UnknownUser(_)) => {
                tracing::warn!(error = %e, "Write for unregistered identity");
                (StatusCode::CONFLICT, e.to_string())
            }
            AppError::Store(StoreError::Unavailable(e)) => {
                tracing::error!(error = %e, "Store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Journal storage is unavailable".into(),
                )
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "code": status.as_u16(),
            }
        });

        let mut response = (status, Json(body)).into_response();
        if let Some(secs) = retry_after {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}

pub type AppResult<T> = Result<T, AppError>;
