use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window request counter keyed by client identity. Each client gets
/// an independent window that resets once the window duration has elapsed.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        RateLimiter {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Records one request for `client` and reports whether it is still
    /// within the configured budget.
    pub fn check(&self, client: &str) -> bool {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");
        let window = windows.entry(client.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });
        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.count = 0;
        }
        if window.count >= self.max_requests {
            return false;
        }
        window.count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enforces_the_window_budget() {
        let limiter = RateLimiter::new(2, Duration::from_secs(60));
        let now = Instant::now();
        assert!(limiter.check_at("10.0.0.1", now));
        assert!(limiter.check_at("10.0.0.1", now));
        assert!(!limiter.check_at("10.0.0.1", now));
    }

    #[test]
    fn resets_once_the_window_elapses() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let start = Instant::now();
        assert!(limiter.check_at("10.0.0.1", start));
        assert!(!limiter.check_at("10.0.0.1", start + Duration::from_secs(59)));
        assert!(limiter.check_at("10.0.0.1", start + Duration::from_secs(60)));
    }

    #[test]
    fn tracks_clients_independently() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();
        assert!(limiter.check_at("10.0.0.1", now));
        assert!(!limiter.check_at("10.0.0.1", now));
        assert!(limiter.check_at("10.0.0.2", now));
    }
}
