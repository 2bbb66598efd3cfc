//! The typewriter state machine.
//!
//! Cycles through a fixed list of phrases, adding or removing one character
//! per tick. A phrase is typed out, held on screen, erased, and then the
//! machine rests briefly before starting the next phrase. The phrase list
//! wraps around indefinitely.
//!
//! The machine is pure: `step` only mutates internal indices and returns a
//! [`Frame`]; callers decide how to render and how to wait. Given the same
//! phrases and pacing, the frame sequence is fully deterministic.

use std::time::Duration;

use super::{Effect, Frame};

/// Tick pacing for the typewriter.
///
/// Defaults match the classic portfolio-page feel: 100 ms per typed
/// character, 50 ms per erased character, a 2 s hold on the full phrase and
/// a 500 ms rest before the next one. All values are tuning knobs, not law.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Delay after typing one character
    pub type_char: Duration,
    /// Delay after erasing one character
    pub delete_char: Duration,
    /// Hold time once a phrase is fully typed
    pub hold: Duration,
    /// Rest time after a phrase is fully erased, before the next one
    pub rest: Duration,
    /// Delay before the very first tick
    pub start_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            type_char: Duration::from_millis(100),
            delete_char: Duration::from_millis(50),
            hold: Duration::from_millis(2000),
            rest: Duration::from_millis(500),
            start_delay: Duration::from_millis(1000),
        }
    }
}

/// Typewriter effect state.
///
/// Invariants, maintained by construction:
/// - `phrase_index < phrases.len()`
/// - `0 <= char_index <= current phrase length` (in chars, not bytes)
/// - `deleting` is set only after the current phrase was rendered in full
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    pacing: Pacing,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    /// Phrases fully typed-and-erased so far (drives the cycle limit)
    phrases_completed: usize,
    /// Stop after this many full passes over the phrase list
    cycle_limit: Option<usize>,
}

impl Typewriter {
    /// Create a typewriter over `phrases`.
    ///
    /// Returns `None` when the list is empty: an empty rotation has nothing
    /// to animate, and callers are expected to treat that as a silent no-op.
    pub fn new(phrases: Vec<String>, pacing: Pacing) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            pacing,
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            phrases_completed: 0,
            cycle_limit: None,
        })
    }

    /// Stop producing frames after `cycles` full passes over the list.
    pub fn with_cycle_limit(mut self, cycles: usize) -> Self {
        self.cycle_limit = Some(cycles);
        self
    }

    /// Index of the phrase currently being typed or erased.
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Number of characters currently rendered.
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    /// True while erasing the current phrase.
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Phrases fully typed and erased since creation.
    pub fn phrases_completed(&self) -> usize {
        self.phrases_completed
    }

    /// Pacing in effect for this machine.
    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Delay to apply before the first tick.
    pub fn start_delay(&self) -> Duration {
        self.pacing.start_delay
    }

    fn finished(&self) -> bool {
        match self.cycle_limit {
            Some(cycles) => self.phrases_completed >= cycles.saturating_mul(self.phrases.len()),
            None => false,
        }
    }

    /// Advance the machine by one tick.
    ///
    /// Typing: render one more character; once the phrase is complete,
    /// switch to deleting and hold. Deleting: render one fewer character;
    /// once empty, advance to the next phrase (wrapping) and rest.
    pub fn tick(&mut self) -> Frame {
        let phrase = &self.phrases[self.phrase_index];
        let len = phrase.chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            let text = char_prefix(phrase, self.char_index);
            if self.char_index == 0 {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.phrases_completed += 1;
                Frame {
                    text,
                    delay: self.pacing.rest,
                }
            } else {
                Frame {
                    text,
                    delay: self.pacing.delete_char,
                }
            }
        } else {
            // Clamp so a zero-length phrase flips straight to deleting
            // instead of incrementing forever.
            self.char_index = (self.char_index + 1).min(len);
            let text = char_prefix(phrase, self.char_index);
            if self.char_index == len {
                self.deleting = true;
                Frame {
                    text,
                    delay: self.pacing.hold,
                }
            } else {
                Frame {
                    text,
                    delay: self.pacing.type_char,
                }
            }
        }
    }
}

impl Effect for Typewriter {
    fn step(&mut self) -> Option<Frame> {
        if self.finished() {
            return None;
        }
        Some(self.tick())
    }
}

/// First `n` characters of `s` (chars, not bytes).
fn char_prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}
