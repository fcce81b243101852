use std::{
    collections::{HashMap, VecDeque},
    net::IpAddr,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;

/// Refusal from [`ExchangeThrottle::admit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Too many token exchanges, retry in {}s", .retry_after.as_secs().max(1))]
pub struct Throttled {
    pub retry_after: Duration,
}

/// Caps how many token exchanges one client address may start per window.
///
/// Only calls to the identity service are counted. Cached remounts and
/// token-less boots never reach it. Single-instance only.
#[derive(Clone)]
pub struct ExchangeThrottle {
    attempts: Arc<Mutex<HashMap<IpAddr, VecDeque<Instant>>>>,
    limit: usize,
    window: Duration,
}

impl ExchangeThrottle {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            attempts: Arc::new(Mutex::new(HashMap::new())),
            limit: limit.max(1),
            window,
        }
    }

    /// Records one exchange attempt for `client`, or refuses it when the
    /// client already made `limit` attempts within the trailing window.
    pub async fn admit(&self, client: IpAddr) -> Result<(), Throttled> {
        let mut attempts = self.attempts.lock().await;
        let now = Instant::now();

        let log = attempts.entry(client).or_default();
        while log
            .front()
            .is_some_and(|t| now.duration_since(*t) >= self.window)
        {
            log.pop_front();
        }

        if log.len() >= self.limit {
            // Non-empty here: limit is at least one attempt.
            let oldest = log.front().copied().unwrap_or(now);
            return Err(Throttled {
                retry_after: self.window.saturating_sub(now.duration_since(oldest)),
            });
        }

        log.push_back(now);
        Ok(())
    }

    /// Forgets clients with no attempt inside the window. Returns how many.
    pub async fn purge_idle(&self) -> usize {
        let mut attempts = self.attempts.lock().await;
        let now = Instant::now();
        let before = attempts.len();
        attempts.retain(|_, log| {
            log.back()
                .is_some_and(|t| now.duration_since(*t) < self.window)
        });
        before - attempts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    const HOME: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
    const OFFICE: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2));

    #[tokio::test]
    async fn test_refuses_past_limit_with_retry_hint() {
        let throttle = ExchangeThrottle::new(3, Duration::from_secs(60));
        for _ in 0..3 {
            assert!(throttle.admit(HOME).await.is_ok());
        }

        let refused = throttle.admit(HOME).await.unwrap_err();
        assert!(refused.retry_after <= Duration::from_secs(60));
        assert!(refused.retry_after > Duration::from_secs(50));
    }

    #[tokio::test]
    async fn test_clients_are_counted_separately() {
        let throttle = ExchangeThrottle::new(1, Duration::from_secs(60));
        assert!(throttle.admit(HOME).await.is_ok());
        assert!(throttle.admit(HOME).await.is_err());
        assert!(throttle.admit(OFFICE).await.is_ok());
    }

    #[tokio::test]
    async fn test_window_slides() {
        let throttle = ExchangeThrottle::new(2, Duration::from_millis(40));
        assert!(throttle.admit(HOME).await.is_ok());
        assert!(throttle.admit(HOME).await.is_ok());
        assert!(throttle.admit(HOME).await.is_err());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(throttle.admit(HOME).await.is_ok());
    }

    #[tokio::test]
    async fn test_purge_drops_only_idle_clients() {
        let throttle = ExchangeThrottle::new(5, Duration::from_millis(40));
        throttle.admit(HOME).await.unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;
        throttle.admit(OFFICE).await.unwrap();

        assert_eq!(throttle.purge_idle().await, 1);
        assert_eq!(throttle.purge_idle().await, 0);
    }
}
