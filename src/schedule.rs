//! Tick scheduling.
//!
//! Effects compute delays; a [`Clock`] decides what a delay means. The real
//! player sleeps on [`SystemClock`], while tests and the `script` command use
//! [`VirtualClock`] to advance time instantly and record every requested
//! delay, so the full frame timeline is observable without waiting on it.

use std::time::Duration;

/// Where ticks wait between frames.
pub trait Clock {
    /// Block (or pretend to) for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Real wall-clock sleeping.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Deterministic clock for tests and exports.
///
/// `sleep` returns immediately; the requested delays accumulate into a
/// virtual elapsed total and are kept in order for inspection.
#[derive(Debug, Default)]
pub struct VirtualClock {
    elapsed: Duration,
    slept: Vec<Duration>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total virtual time slept so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Every delay requested, in order.
    pub fn slept(&self) -> &[Duration] {
        &self.slept
    }
}

impl Clock for VirtualClock {
    fn sleep(&mut self, duration: Duration) {
        self.elapsed += duration;
        self.slept.push(duration);
    }
}
