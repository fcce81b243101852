use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{token_fingerprint, ExchangeError, IdentityExchange};
use crate::models::user::UserId;

/// Calls the identity service's user-info endpoint with a bounded timeout.
#[derive(Clone)]
pub struct HttpIdentityExchange {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    #[serde(default)]
    user_id: Value,
}

impl HttpIdentityExchange {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

/// Accepts a positive integral number (`42` or `42.0`) or a numeric string.
/// Zero, negatives, fractions and anything else count as missing.
fn usable_user_id(raw: &Value) -> Option<UserId> {
    let id = match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }?;
    (id > 0).then_some(id)
}

#[async_trait]
impl IdentityExchange for HttpIdentityExchange {
    async fn exchange(&self, token: &str) -> Result<UserId, ExchangeError> {
        let fingerprint = token_fingerprint(token);
        tracing::debug!(token = %fingerprint, "Exchanging token for identity");

        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "token": token }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(token = %fingerprint, status = %status, "Identity service rejected token");
            return Err(ExchangeError::Status(status));
        }

        let body: UserInfoResponse = response.json().await?;
        usable_user_id(&body.user_id).ok_or(ExchangeError::MissingUserId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/user/user-info", addr)
    }

    fn client(url: String) -> HttpIdentityExchange {
        HttpIdentityExchange::new(url, Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn test_usable_user_id() {
        assert_eq!(usable_user_id(&json!(42)), Some(42));
        assert_eq!(usable_user_id(&json!("42")), Some(42));
        assert_eq!(usable_user_id(&json!(0)), None);
        assert_eq!(usable_user_id(&json!(null)), None);
        assert_eq!(usable_user_id(&json!("abc")), None);
        assert_eq!(usable_user_id(&json!(4.5)), None);
    }

    #[test]
    fn test_usable_user_id_edges() {
        assert_eq!(usable_user_id(&json!(42.0)), Some(42));
        assert_eq!(usable_user_id(&json!(-42)), None);
        assert_eq!(usable_user_id(&json!("-42")), None);
        assert_eq!(usable_user_id(&json!(-1.0)), None);
        assert_eq!(usable_user_id(&json!(" 42 ")), Some(42));
    }

    #[tokio::test]
    async fn test_exchange_success() {
        let url = serve(Router::new().route(
            "/user/user-info",
            post(|Json(body): Json<Value>| async move {
                if body["token"] == "abc123" {
                    Json(json!({ "user_id": 42, "name": "ignored" }))
                } else {
                    Json(json!({}))
                }
            }),
        ))
        .await;

        assert_eq!(client(url).exchange("abc123").await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_exchange_missing_user_id() {
        let url = serve(Router::new().route(
            "/user/user-info",
            post(|| async { Json(json!({ "status": "ok" })) }),
        ))
        .await;

        let err = client(url).exchange("abc123").await.unwrap_err();
        assert!(matches!(err, ExchangeError::MissingUserId));
    }

    #[tokio::test]
    async fn test_exchange_http_error() {
        let url = serve(Router::new().route(
            "/user/user-info",
            post(|| async { (StatusCode::UNAUTHORIZED, "bad token") }),
        ))
        .await;

        let err = client(url).exchange("abc123").await.unwrap_err();
        assert!(matches!(err, ExchangeError::Status(s) if s.as_u16() == 401));
    }

    #[tokio::test]
    async fn test_exchange_times_out() {
        let url = serve(Router::new().route(
            "/user/user-info",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({ "user_id": 42 }))
            }),
        ))
        .await;

        let slow = HttpIdentityExchange::new(url, Duration::from_millis(100)).unwrap();
        let err = slow.exchange("abc123").await.unwrap_err();
        assert!(matches!(err, ExchangeError::Transport(e) if e.is_timeout()));
    }

    #[tokio::test]
    async fn test_exchange_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{}/user/user-info", addr))
            .exchange("abc123")
            .await
            .unwrap_err();
        assert!(matches!(err, ExchangeError::Transport(_)));
    }
}
