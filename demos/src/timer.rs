use std::time::{Duration, Instant};

use log::info;

/// Scope timer: logs the time elapsed since creation when dropped.
#[derive(Debug)]
pub struct Timer {
    title: String,
    start: Instant,
}

impl Timer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let d = self.elapsed();
        info!(
            "Timer({}): {}us ({}ms)",
            self.title,
            d.as_micros(),
            d.as_secs_f64() * 1000.0
        );
    }
}
