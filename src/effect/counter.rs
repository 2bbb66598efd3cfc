//! Count-up number animation.
//!
//! Counts from zero to a target integer over a fixed duration, rendering the
//! floor of the running value each frame and landing exactly on the target.

use std::time::Duration;

use super::{Effect, Frame};

/// Finite count-up effect.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u64,
    current: f64,
    increment: f64,
    frame_interval: Duration,
    done: bool,
}

impl CountUp {
    /// Default total animation duration.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

    /// Time between frames (roughly 60 fps).
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

    /// Count from 0 to `target` over `duration`.
    pub fn new(target: u64, duration: Duration) -> Self {
        let frames = duration.as_millis() as f64 / Self::FRAME_INTERVAL.as_millis() as f64;
        let increment = if frames >= 1.0 {
            target as f64 / frames
        } else {
            // Degenerate duration: jump straight to the target.
            target as f64
        };
        Self {
            target,
            current: 0.0,
            increment,
            frame_interval: Self::FRAME_INTERVAL,
            done: false,
        }
    }

    /// Target value the animation lands on.
    pub fn target(&self) -> u64 {
        self.target
    }
}

impl Effect for CountUp {
    fn step(&mut self) -> Option<Frame> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            Some(Frame {
                text: (self.current.floor() as u64).to_string(),
                delay: self.frame_interval,
            })
        } else {
            self.done = true;
            Some(Frame {
                text: self.target.to_string(),
                delay: Duration::ZERO,
            })
        }
    }
}
