//! Lightweight wall-clock timing.
//!
//! Used by the solver to enforce optional time budgets and to report how
//! long a solve took.

use std::time::{Duration, Instant};

/// A simple timer that measures elapsed time since it was started.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since `start`.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time in seconds.
    pub fn elapsed_s(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// True once more than `limit` has passed. `None` never expires.
    pub fn exceeded(&self, limit: Option<Duration>) -> bool {
        limit.is_some_and(|limit| self.elapsed() > limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_limit_never_expires() {
        let timer = Timer::start();
        assert!(!timer.exceeded(None));
    }

    #[test]
    fn zero_limit_expires() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(2));
        assert!(timer.exceeded(Some(Duration::ZERO)));
        assert!(timer.elapsed_s() > 0.0);
    }
}
