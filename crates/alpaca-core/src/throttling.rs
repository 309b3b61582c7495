use std::num::NonZeroU32;
use std::sync::Arc;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Default outbound pace for a single provider.
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 5;

/// Token-bucket pacing for outbound provider calls.
///
/// Cloning shares the bucket, so every clone draws from the same budget.
#[derive(Clone)]
pub struct RequestThrottle {
    limiter: Arc<DirectRateLimiter>,
    per_second: u32,
}

impl RequestThrottle {
    /// Allows `per_second` calls per second with an equal burst. Zero is treated as one.
    pub fn per_second(per_second: u32) -> Self {
        let rate = NonZeroU32::new(per_second).unwrap_or(NonZeroU32::MIN);
        Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_second(rate))),
            per_second: rate.get(),
        }
    }

    /// Waits until a call may be issued.
    pub async fn acquire(&self) {
        self.limiter.until_ready().await;
    }

    /// Claims budget without waiting; `false` when the bucket is empty.
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }

    pub const fn rate(&self) -> u32 {
        self.per_second
    }
}

impl Default for RequestThrottle {
    fn default() -> Self {
        Self::per_second(DEFAULT_REQUESTS_PER_SECOND)
    }
}

impl std::fmt::Debug for RequestThrottle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestThrottle")
            .field("per_second", &self.per_second)
            .finish()
    }
}
