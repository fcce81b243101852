use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::error::AppError;
use crate::models::user::UserId;
use crate::session::SessionId;
use crate::AppState;

/// Identity attached to requests that passed `require_session`.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: UserId,
    pub session_id: SessionId,
}

/// Session id carried as `Authorization: Bearer <uuid>`, if well-formed.
pub fn bearer_session_id(
    header: Option<TypedHeader<Authorization<Bearer>>>,
) -> Option<SessionId> {
    let TypedHeader(Authorization(bearer)) = header?;
    bearer.token().parse().ok()
}

/// Rejects requests whose session has no resolved identity. Nothing
/// downstream runs for them.
pub async fn require_session(
    State(state): State<AppState>,
    header: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session_id = bearer_session_id(header).ok_or(AppError::Unauthorized)?;

    let user_id = state
        .bootstrap
        .resolve(&session_id)
        .await
        .ok_or(AppError::Unauthorized)?;

    req.extensions_mut().insert(SessionUser {
        user_id,
        session_id,
    });
    Ok(next.run(req).await)
}
