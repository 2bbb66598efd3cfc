//! typist - terminal typewriter effect player
//!
//! Animates a rotating list of phrases with humanlike typing pacing, plus a
//! count-up number animation. The effects themselves are pure state machines
//! (see [`effect`]); timing goes through a pluggable [`schedule::Clock`] so
//! the full frame timeline is testable and exportable without real waits.
//!
//! # Example
//!
//! ```
//! use typist::{Pacing, Typewriter};
//!
//! let mut typer = Typewriter::new(
//!     vec!["AB".to_string(), "C".to_string()],
//!     Pacing::default(),
//! )
//! .expect("non-empty phrase list");
//!
//! let first = typer.tick();
//! assert_eq!(first.text, "A");
//! ```

pub mod config;
pub mod effect;
pub mod render;
pub mod runner;
pub mod schedule;
pub mod script;
pub mod tui;

pub use config::{Config, ConfigError, PacingConfig};
pub use effect::{CountUp, Effect, Frame, Pacing, Typewriter};

/// Full version string: crate version, git SHA (dev builds), build date.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let date = env!("TYPIST_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => {
            let short = &sha[..sha.len().min(7)];
            format!("{} ({} {})", version, short, date)
        }
        None => format!("{} ({})", version, date),
    }
}
