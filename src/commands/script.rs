//! `script` subcommand handler
//!
//! Exports the deterministic frame sequence instead of animating it. The
//! machine is stepped straight to completion with no clock at all, so the
//! output is a pure function of phrases, pacing, and cycle count.

use std::io::{self, Write};

use anyhow::Result;
use chrono::Utc;
use clap::ValueEnum;

use typist::script::{self, PacingMs, ScriptEncoder, ScriptHeader, SCRIPT_VERSION};
use typist::{Config, Typewriter};

/// Output format for the frame log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScriptFormat {
    /// JSON header line, then one `[delay_ms, "text"]` line per frame
    Jsonl,
    /// Aligned human-readable lines
    Text,
}

#[cfg(not(tarpaulin_include))]
pub fn handle_script(
    phrases: Vec<String>,
    cycles: usize,
    format: ScriptFormat,
    timestamp: bool,
) -> Result<()> {
    let config = Config::load()?;
    let phrases = if phrases.is_empty() {
        config.phrases.clone()
    } else {
        phrases
    };
    let pacing = config.pacing.to_pacing();

    let mut typer = match Typewriter::new(phrases.clone(), pacing) {
        Some(typer) => typer.with_cycle_limit(cycles),
        None => return Ok(()),
    };
    let frames = script::capture(&mut typer);

    let mut out = io::stdout().lock();
    match format {
        ScriptFormat::Jsonl => {
            let mut encoder = ScriptEncoder::new();
            let header = ScriptHeader {
                version: SCRIPT_VERSION,
                phrases,
                pacing: PacingMs::from(&pacing),
                // Off by default so the output stays reproducible
                timestamp: timestamp.then(|| Utc::now().timestamp()),
            };
            out.write_all(&encoder.header(&header)?)?;
            for frame in &frames {
                out.write_all(&encoder.frame(frame)?)?;
            }
        }
        ScriptFormat::Text => {
            for frame in &frames {
                writeln!(out, "{}", script::format_text_line(frame))?;
            }
        }
    }
    Ok(())
}
