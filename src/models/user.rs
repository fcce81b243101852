use serde::Serialize;

/// Numeric identifier issued by the external identity service.
pub type UserId = i64;

/// Identity as seen by `GET /api/me`.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub user_id: UserId,
}
