use std::time::{Duration, Instant};

use crate::config::Config;
use crate::rate_limit::RateLimiter;

/// Shared application state. The rate limiter is the only piece of state
/// that outlives a single request.
pub struct AppState {
    pub config: Config,
    pub rate_limiter: RateLimiter,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let rate_limiter = RateLimiter::new(
            config.rate_limit_max,
            Duration::from_secs(config.rate_limit_window_secs),
        );
        AppState {
            config,
            rate_limiter,
            started_at: Instant::now(),
        }
    }

    /// Whole seconds since the state was created at startup.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
