use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use serde::Serialize;
use uuid::Uuid;

use super::cache::{SessionCache, SessionId};
use super::throttle::{ExchangeThrottle, Throttled};
use crate::identity::{token_fingerprint, IdentityExchange};
use crate::models::user::UserId;
use crate::store::EntryStore;

const TOKEN_PARAM: &str = "token";
const MAINTENANCE_INTERVAL: Duration = Duration::from_secs(300);

/// Terminal state of one bootstrap run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BootOutcome {
    Ready {
        user_id: UserId,
        session_id: SessionId,
        /// Page address with the token removed. Only set when a token was consumed.
        #[serde(skip_serializing_if = "Option::is_none")]
        clean_url: Option<String>,
    },
    Unauthenticated,
    Failed {
        redirect_to: String,
    },
}

/// Resolves one user identity per session and registers it with the store.
#[derive(Clone)]
pub struct SessionBootstrap {
    cache: SessionCache,
    throttle: ExchangeThrottle,
    identity: Arc<dyn IdentityExchange>,
    store: Arc<dyn EntryStore>,
    reauth_path: String,
}

impl SessionBootstrap {
    pub fn new(
        cache: SessionCache,
        throttle: ExchangeThrottle,
        identity: Arc<dyn IdentityExchange>,
        store: Arc<dyn EntryStore>,
        reauth_path: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            throttle,
            identity,
            store,
            reauth_path: reauth_path.into(),
        }
    }

    /// Cached identity for a session, if any. Never touches the network.
    pub async fn resolve(&self, session_id: &SessionId) -> Option<UserId> {
        let raw = self.cache.get(session_id).await?;
        match raw.parse::<UserId>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!(session_id = %session_id, "Discarding unreadable cached identity");
                self.cache.clear(session_id).await;
                None
            }
        }
    }

    pub async fn end(&self, session_id: &SessionId) -> bool {
        self.cache.clear(session_id).await
    }

    /// Runs one bootstrap for a widget mount from `client`.
    ///
    /// Only the token exchange is throttled; a cached session or a page
    /// without a token always gets its terminal state.
    pub async fn boot(
        &self,
        session_id: Option<SessionId>,
        client: IpAddr,
        page_url: &Url,
    ) -> Result<BootOutcome, Throttled> {
        if let Some(sid) = session_id {
            if let Some(user_id) = self.resolve(&sid).await {
                tracing::debug!(session_id = %sid, user_id = user_id, "Identity restored from session");
                return Ok(BootOutcome::Ready {
                    user_id,
                    session_id: sid,
                    clean_url: None,
                });
            }
        }

        let token = page_url
            .query_pairs()
            .find(|(k, _)| k == TOKEN_PARAM)
            .map(|(_, v)| v.into_owned())
            .filter(|t| !t.is_empty());

        let Some(token) = token else {
            return Ok(BootOutcome::Unauthenticated);
        };

        if let Err(refused) = self.throttle.admit(client).await {
            tracing::warn!(
                ip = %client,
                retry_after_secs = refused.retry_after.as_secs(),
                "Token exchange throttled"
            );
            return Err(refused);
        }

        let user_id = match self.identity.exchange(&token).await {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(
                    token = %token_fingerprint(&token),
                    error = %e,
                    "Identity exchange failed"
                );
                return Ok(BootOutcome::Failed {
                    redirect_to: self.reauth_path.clone(),
                });
            }
        };

        let sid = Uuid::new_v4();
        self.cache.set(sid, user_id.to_string()).await;

        // Later writes may still fail on the missing user row; that surfaces there.
        if let Err(e) = self.store.register_user(user_id).await {
            tracing::error!(user_id = user_id, error = %e, "Failed to register identity");
        }

        tracing::info!(user_id = user_id, session_id = %sid, "Session identity resolved");

        Ok(BootOutcome::Ready {
            user_id,
            session_id: sid,
            clean_url: Some(strip_query(page_url)),
        })
    }

    /// Purges expired sessions and idle throttle logs every 5 minutes.
    pub fn spawn_maintenance_worker(&self) {
        let cache = self.cache.clone();
        let throttle = self.throttle.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(MAINTENANCE_INTERVAL);
            loop {
                interval.tick().await;
                let purged = cache.purge_expired().await;
                if purged > 0 {
                    tracing::info!(purged = purged, "Expired sessions purged");
                }
                throttle.purge_idle().await;
            }
        });
    }
}

fn strip_query(url: &Url) -> String {
    let mut clean = url.clone();
    clean.set_query(None);
    clean.set_fragment(None);
    clean.to_string()
}
