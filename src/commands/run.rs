//! `run` subcommand handler
//!
//! Animates the phrase rotation inline on the current line, or full-screen
//! with `--banner`. Guards mirror the effect's no-op semantics: an empty
//! phrase list exits silently, and a non-tty stdout gets the phrases printed
//! plainly instead of an animation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use typist::render::{self, InlineRenderer};
use typist::runner::{drive, RunOptions};
use typist::schedule::SystemClock;
use typist::tui::{BannerApp, Theme};
use typist::{Config, Typewriter};

#[cfg(not(tarpaulin_include))]
pub fn handle_run(
    phrases: Vec<String>,
    speed: f64,
    cycles: Option<usize>,
    banner: bool,
    no_start_delay: bool,
) -> Result<()> {
    let config = Config::load()?;
    let phrases = if phrases.is_empty() {
        config.phrases.clone()
    } else {
        phrases
    };
    let mut pacing = config.pacing.to_pacing();
    if no_start_delay {
        pacing.start_delay = Duration::ZERO;
    }

    let typer = match Typewriter::new(phrases.clone(), pacing) {
        Some(typer) => typer,
        None => {
            // Empty rotation disables the effect entirely.
            debug!("no phrases configured, nothing to animate");
            return Ok(());
        }
    };
    let typer = match cycles {
        Some(n) => typer.with_cycle_limit(n),
        None => typer,
    };
    let theme = Theme::by_name(&config.theme);

    if !atty::is(atty::Stream::Stdout) {
        // Piped output: no animation (banner included), one phrase per line.
        for phrase in &phrases {
            println!("{}", phrase);
        }
        return Ok(());
    }

    if banner {
        return BannerApp::new(typer, theme, speed).run();
    }

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || {
            stop.store(true, Ordering::SeqCst);
            render::show_cursor();
        })?;
    }

    let mut typer = typer;
    let mut clock = SystemClock;
    let mut sink = InlineRenderer::new(theme)?;
    let opts = RunOptions {
        speed,
        start_delay: pacing.start_delay,
    };
    drive(&mut typer, &mut clock, &mut sink, &opts, &stop)?;
    Ok(())
}
