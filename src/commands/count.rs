//! `count` subcommand handler
//!
//! Plays the count-up animation to the target number. On a non-tty stdout
//! the final value is printed directly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use typist::render::{self, InlineRenderer};
use typist::runner::{drive, RunOptions};
use typist::schedule::SystemClock;
use typist::tui::Theme;
use typist::{Config, CountUp};

#[cfg(not(tarpaulin_include))]
pub fn handle_count(target: u64, duration_ms: u64, speed: f64) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        println!("{}", target);
        return Ok(());
    }

    let config = Config::load()?;
    let theme = Theme::by_name(&config.theme);

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || {
            stop.store(true, Ordering::SeqCst);
            render::show_cursor();
        })?;
    }

    let mut effect = CountUp::new(target, Duration::from_millis(duration_ms));
    let mut clock = SystemClock;
    let mut sink = InlineRenderer::new(theme)?;
    let opts = RunOptions {
        speed,
        start_delay: Duration::ZERO,
    };
    drive(&mut effect, &mut clock, &mut sink, &opts, &stop)?;
    Ok(())
}
