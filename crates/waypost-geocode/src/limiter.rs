//! Minimum-interval pacing for outbound provider calls.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Spaces successive provider calls by at least `min_interval`, process-wide.
///
/// One long-lived instance is constructed at startup and shared (via `Arc`)
/// by every resolver that talks to the provider, so the pacing covers all
/// callers, not a per-client window. The mutex is held across the wait:
/// concurrent callers serialize, and no two calls can be observed closer
/// than `min_interval` apart. Coarse on purpose — the provider's contract
/// is about spacing, not throughput.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    /// A limiter that never waits. For tests and local fixtures.
    #[must_use]
    pub fn unthrottled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Suspends until at least `min_interval` has elapsed since the last
    /// permitted call, then records the new call time and returns.
    ///
    /// Always eventually returns; there is no error path.
    pub async fn throttle(&self) {
        let mut last_call = self.last_call.lock().await;
        if let Some(last) = *last_call {
            let ready_at = last + self.min_interval;
            if ready_at > Instant::now() {
                tokio::time::sleep_until(ready_at).await;
            }
        }
        *last_call = Some(Instant::now());
    }
}
