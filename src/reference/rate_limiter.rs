// Request pacing for the reference service.
//
// Wikimedia asks API clients to keep request rates modest. Every search and
// summary call goes through one shared limiter that enforces a minimum gap
// between requests. A limiter built with `unlimited()` never waits.

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Enforces a minimum interval between consecutive requests.
#[derive(Clone)]
pub struct RateLimiter {
    interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Allow at most `requests_per_second` requests per second.
    ///
    /// Non-positive or non-finite rates disable pacing.
    pub fn per_second(requests_per_second: f64) -> Self {
        let interval = if requests_per_second.is_finite() && requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::ZERO
        };
        Self {
            interval,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// A limiter that lets every request through immediately.
    pub fn unlimited() -> Self {
        Self::per_second(0.0)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the next request is allowed.
    ///
    /// The lock is held across the sleep so concurrent callers queue up
    /// behind each other instead of all waking at the same instant.
    pub async fn acquire(&self) {
        if self.interval.is_zero() {
            return;
        }

        let mut last = self.last_request.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_request_is_immediate() {
        let limiter = RateLimiter::per_second(1.0);
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_second_request_waits_for_interval() {
        let limiter = RateLimiter::per_second(5.0); // 200ms between requests
        limiter.acquire().await;
        let start = Instant::now();
        limiter.acquire().await;
        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_millis(150),
            "Expected ~200ms delay, got {:?}",
            elapsed
        );
    }

    #[tokio::test]
    async fn test_unlimited_never_waits() {
        let limiter = RateLimiter::unlimited();
        assert!(limiter.interval().is_zero());
        let start = Instant::now();
        for _ in 0..20 {
            limiter.acquire().await;
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn test_invalid_rates_disable_pacing() {
        assert!(RateLimiter::per_second(-1.0).interval().is_zero());
        assert!(RateLimiter::per_second(f64::NAN).interval().is_zero());
        assert_eq!(
            RateLimiter::per_second(4.0).interval(),
            Duration::from_millis(250)
        );
    }
}
