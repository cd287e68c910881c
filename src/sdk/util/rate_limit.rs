use governor::clock::{Clock, DefaultClock};
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::thread;

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

pub fn directions_limiter(requests_per_minute: NonZeroU32) -> Limiter {
    let quota = Quota::per_minute(requests_per_minute);
    Arc::new(RateLimiter::direct(quota))
}

/// Blocks the current thread until the limiter lets one request through.
pub fn wait_for(limiter: &Limiter) {
    while let Err(not_until) = limiter.check() {
        let wait = not_until.wait_time_from(DefaultClock::default().now());
        log::debug!("Rate limited, waiting {:?} before next request", wait);
        thread::sleep(wait);
    }
}
