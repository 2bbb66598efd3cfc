//! The tick loop.
//!
//! Drives an [`Effect`] against a [`Clock`] and a [`Sink`]: render the frame,
//! wait the frame's delay, step again. Ticks are strictly sequential; tick
//! n+1 is never taken before tick n's render has been written.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, trace};

use crate::effect::Effect;
use crate::render::Sink;
use crate::schedule::Clock;

/// Slowest allowed speed multiplier.
pub const MIN_SPEED: f64 = 0.1;
/// Fastest allowed speed multiplier.
pub const MAX_SPEED: f64 = 16.0;

/// Options for one run of the loop.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Speed multiplier applied to every delay (1.0 = configured pacing)
    pub speed: f64,
    /// Delay before the first tick
    pub start_delay: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            speed: 1.0,
            start_delay: Duration::ZERO,
        }
    }
}

/// Scale a delay by a speed multiplier (2.0 = twice as fast).
pub fn scale_delay(delay: Duration, speed: f64) -> Duration {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    delay.div_f64(speed)
}

/// Run `effect` to completion (or until `stop` is raised).
///
/// Returns the number of frames rendered. Infinite effects only return once
/// `stop` is set from elsewhere (e.g. a Ctrl-C handler).
pub fn drive<E, C, S>(
    effect: &mut E,
    clock: &mut C,
    sink: &mut S,
    opts: &RunOptions,
    stop: &AtomicBool,
) -> io::Result<usize>
where
    E: Effect,
    C: Clock,
    S: Sink,
{
    let speed = opts.speed.clamp(MIN_SPEED, MAX_SPEED);
    if !opts.start_delay.is_zero() {
        clock.sleep(scale_delay(opts.start_delay, speed));
    }

    let mut frames = 0;
    while !stop.load(Ordering::SeqCst) {
        let frame = match effect.step() {
            Some(frame) => frame,
            None => break,
        };
        sink.render(&frame.text)?;
        frames += 1;
        trace!(
            frame = frames,
            text = %frame.text,
            delay_ms = frame.delay.as_millis() as u64,
            "tick"
        );
        clock.sleep(scale_delay(frame.delay, speed));
    }
    sink.finish()?;
    debug!(frames, "effect run finished");
    Ok(frames)
}
