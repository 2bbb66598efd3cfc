//! Frame log export.
//!
//! Serializes the deterministic frame sequence of an effect as a line-based
//! log: one JSON header line with the machine's configuration, then one
//! `[delay_ms, "text"]` line per frame. The log is a pure function of the
//! phrase list, pacing, and cycle count, which makes it diffable and easy to
//! assert on in tests or pipe into other tools.

use serde::Serialize;

use crate::effect::{Effect, Frame, Pacing};

/// Format version for the frame log.
pub const SCRIPT_VERSION: u8 = 1;

/// Header line of a frame log.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptHeader {
    pub version: u8,
    pub phrases: Vec<String>,
    pub pacing: PacingMs,
    /// Unix timestamp of export; omitted for reproducible output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Pacing expressed in milliseconds for serialization.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PacingMs {
    pub type_char_ms: u64,
    pub delete_char_ms: u64,
    pub hold_ms: u64,
    pub rest_ms: u64,
    pub start_delay_ms: u64,
}

impl From<&Pacing> for PacingMs {
    fn from(pacing: &Pacing) -> Self {
        Self {
            type_char_ms: pacing.type_char.as_millis() as u64,
            delete_char_ms: pacing.delete_char.as_millis() as u64,
            hold_ms: pacing.hold.as_millis() as u64,
            rest_ms: pacing.rest.as_millis() as u64,
            start_delay_ms: pacing.start_delay.as_millis() as u64,
        }
    }
}

/// Writes header and frame lines of a frame log.
#[derive(Debug, Default)]
pub struct ScriptEncoder;

impl ScriptEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the header line (JSON object plus newline).
    pub fn header(&mut self, header: &ScriptHeader) -> Result<Vec<u8>, serde_json::Error> {
        let mut data = serde_json::to_string(header)?.into_bytes();
        data.push(b'\n');
        Ok(data)
    }

    /// Serialize one frame line: `[delay_ms, "text"]` plus newline.
    pub fn frame(&mut self, frame: &Frame) -> Result<Vec<u8>, serde_json::Error> {
        let line = format!(
            "[{}, {}]\n",
            frame.delay.as_millis(),
            serde_json::to_string(&frame.text)?
        );
        Ok(line.into_bytes())
    }
}

/// Human-readable frame line for the `text` format.
pub fn format_text_line(frame: &Frame) -> String {
    format!("{:>6}ms  {}", frame.delay.as_millis(), frame.text)
}

/// Run a finite effect to completion and collect its frames.
pub fn capture<E: Effect>(effect: &mut E) -> Vec<Frame> {
    let mut frames = Vec::new();
    while let Some(frame) = effect.step() {
        frames.push(frame);
    }
    frames
}
