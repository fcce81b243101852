//! Token-for-identity exchange against the external identity service.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::models::user::UserId;

pub mod client;

pub use client::HttpIdentityExchange;

#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("Identity request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Identity service returned {0}")]
    Status(reqwest::StatusCode),

    #[error("User id missing from identity response")]
    MissingUserId,
}

#[async_trait]
pub trait IdentityExchange: Send + Sync {
    /// One outbound call. Not retried.
    async fn exchange(&self, token: &str) -> Result<UserId, ExchangeError>;
}

/// Short SHA-256 prefix of a token, safe to log.
pub fn token_fingerprint(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..12].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable_and_short() {
        let a = token_fingerprint("abc123");
        assert_eq!(a.len(), 12);
        assert_eq!(a, token_fingerprint("abc123"));
        assert_ne!(a, token_fingerprint("abc124"));
        assert!(!a.contains("abc123"));
    }
}
