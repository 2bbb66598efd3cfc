//! Animation effects for the terminal.
//!
//! Effects are pure state machines: each call to [`Effect::step`] advances
//! the machine by one tick and yields a [`Frame`] (the text to display and
//! how long to wait before the next tick). No effect touches the terminal
//! itself; rendering and timing live in `render` and `schedule`.
//!
//! - `typing`: the rotating typewriter effect (type, hold, erase, rest)
//! - `counter`: finite count-up number animation

mod counter;
mod typing;

use std::time::Duration;

pub use counter::CountUp;
pub use typing::{Pacing, Typewriter};

/// One rendered step of an effect.
///
/// `delay` is the time to wait *after* showing `text` before the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Text to display for this tick
    pub text: String,
    /// Delay before the next tick
    pub delay: Duration,
}

impl Frame {
    /// Create a frame with a delay given in milliseconds.
    pub fn new(text: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            text: text.into(),
            delay: Duration::from_millis(delay_ms),
        }
    }
}

/// A steppable animation.
///
/// `step` returns `None` once the effect has finished. Infinite effects
/// (like the typewriter without a cycle limit) never return `None`.
pub trait Effect {
    fn step(&mut self) -> Option<Frame>;
}
