pub mod bootstrap;
pub mod cache;
pub mod throttle;

pub use bootstrap::{BootOutcome, SessionBootstrap};
pub use cache::{SessionCache, SessionId};
pub use throttle::{ExchangeThrottle, Throttled};
