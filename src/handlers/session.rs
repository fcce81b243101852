use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    Extension, Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use reqwest::Url;
use validator::Validate;

use crate::auth::middleware::{bearer_session_id, SessionUser};
use crate::dto::{BootstrapRequest, SessionClearedResponse};
use crate::error::{AppError, AppResult};
use crate::models::user::UserProfile;
use crate::session::BootOutcome;
use crate::AppState;

/// Runs the session bootstrap for the page the widget was loaded on.
///
/// Answers 200 with the terminal state; `failed` carries the
/// re-authentication route the client should navigate to. A client that
/// starts too many token exchanges gets 429 instead.
pub async fn bootstrap(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    header: Option<TypedHeader<Authorization<Bearer>>>,
    Json(body): Json<BootstrapRequest>,
) -> AppResult<Json<BootOutcome>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let page_url = Url::parse(&body.page_url)
        .map_err(|e| AppError::Validation(format!("Invalid page_url: {}", e)))?;

    let outcome = state
        .bootstrap
        .boot(bearer_session_id(header), addr.ip(), &page_url)
        .await?;

    Ok(Json(outcome))
}

pub async fn end_session(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
) -> Json<SessionClearedResponse> {
    let cleared = state.bootstrap.end(&session.session_id).await;
    tracing::info!(user_id = session.user_id, session_id = %session.session_id, "Session cleared");
    Json(SessionClearedResponse { cleared })
}

pub async fn me(Extension(session): Extension<SessionUser>) -> Json<UserProfile> {
    Json(UserProfile {
        user_id: session.user_id,
    })
}
