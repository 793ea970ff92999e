//! Application state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use signup_core::ActivityRegistry;

/// Application state shared across handlers.
pub struct AppState {
    pub registry: Arc<ActivityRegistry>,
    start_time: Instant,
    request_count: AtomicU64,
}

impl AppState {
    pub fn new(registry: Arc<ActivityRegistry>) -> Self {
        Self {
            registry,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    pub fn increment_requests(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for AppState {
    /// State over the built-in activity set.
    fn default() -> Self {
        Self::new(Arc::new(ActivityRegistry::seeded()))
    }
}
