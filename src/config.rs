use std::env;
use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    /// Unset means entries are kept in process memory only.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,

    pub identity_api_url: String,
    pub identity_timeout_secs: u64,
    pub reauth_path: String,

    pub session_ttl_secs: u64,
    /// Token exchanges one client address may start per minute.
    pub exchange_limit_per_min: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .context("PORT must be a number")?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".into()),

            identity_api_url: env::var("IDENTITY_API_URL")
                .unwrap_or_else(|_| "https://api.mantracare.com/user/user-info".into()),
            identity_timeout_secs: env::var("IDENTITY_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .context("IDENTITY_TIMEOUT_SECS must be a number")?,
            reauth_path: env::var("REAUTH_PATH").unwrap_or_else(|_| "/token".into()),

            session_ttl_secs: env::var("SESSION_TTL_SECS")
                .unwrap_or_else(|_| "43200".into()) // 12 hours
                .parse()
                .context("SESSION_TTL_SECS must be a number")?,
            exchange_limit_per_min: env::var("EXCHANGE_LIMIT_PER_MIN")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .context("EXCHANGE_LIMIT_PER_MIN must be a number")?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn identity_timeout(&self) -> Duration {
        Duration::from_secs(self.identity_timeout_secs)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}
