//! Rate Limiter Module
//!
//! Enforces a minimum spacing between consecutive outbound fetches,
//! process-wide.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::debug;

// == Rate Limiter ==
/// Single global gate spacing outbound fetches.
///
/// The mutex guards the scheduled issuance moment of the most recent
/// fetch-issuing call. A caller reserves the next free slot while holding the
/// lock and sleeps after releasing it, so a burst of concurrent callers
/// serializes to one fetch per `min_delay` without anyone waiting inside the
/// critical section.
#[derive(Debug)]
pub struct RateLimiter {
    /// Minimum spacing between consecutive fetches
    min_delay: Duration,
    /// Scheduled issuance moment of the previous fetch, None before the first
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    // == Constructor ==
    /// Creates a limiter enforcing `min_delay` between fetches.
    pub fn new(min_delay: Duration) -> Self {
        Self {
            min_delay,
            last_request: Mutex::new(None),
        }
    }

    // == Throttle ==
    /// Suspends the caller until its fetch may be issued.
    ///
    /// The read-then-update of the issuance marker is atomic: each caller
    /// computes its own slot as `max(now, previous slot + min_delay)` and
    /// stores it before unlocking. Never fails; the first caller and any
    /// caller arriving after a long idle period pass straight through.
    pub async fn throttle(&self) {
        let scheduled = {
            let mut last = self.last_request.lock().await;
            let now = Instant::now();
            let scheduled = match *last {
                Some(prev) => (prev + self.min_delay).max(now),
                None => now,
            };
            *last = Some(scheduled);
            scheduled
        };

        let wait = scheduled.saturating_duration_since(Instant::now());
        if !wait.is_zero() {
            debug!("Throttling outbound fetch for {} ms", wait.as_millis());
            tokio::time::sleep(wait).await;
        }
    }
}
