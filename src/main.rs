//! typist CLI entry point

use std::io;
use std::sync::OnceLock;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};

mod commands;

use commands::script::ScriptFormat;

/// Full version string, built once (crate version, git SHA, build date).
fn long_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(typist::version_string)
}

#[derive(Parser)]
#[command(
    name = "typist",
    about = "Terminal typewriter - animates rotating phrase lists with humanlike pacing",
    version = long_version()
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate phrases with the typewriter effect
    Run {
        /// Phrases to rotate through (defaults to the config file's list)
        phrases: Vec<String>,

        /// Speed multiplier (0.1 to 16)
        #[arg(long, default_value_t = 1.0)]
        speed: f64,

        /// Stop after this many full passes over the phrase list
        #[arg(long)]
        cycles: Option<usize>,

        /// Full-screen banner mode (q quits, space pauses, +/- speed)
        #[arg(long)]
        banner: bool,

        /// Skip the initial start delay
        #[arg(long)]
        no_start_delay: bool,
    },

    /// Animate a count-up to a target number
    Count {
        /// Number to count up to
        target: u64,

        /// Total animation duration in milliseconds
        #[arg(long, default_value_t = 2000)]
        duration_ms: u64,

        /// Speed multiplier (0.1 to 16)
        #[arg(long, default_value_t = 1.0)]
        speed: f64,
    },

    /// Print the deterministic frame sequence without animating
    Script {
        /// Phrases to rotate through (defaults to the config file's list)
        phrases: Vec<String>,

        /// Full passes over the phrase list to export
        #[arg(long, default_value_t = 1)]
        cycles: usize,

        /// Output format
        #[arg(long, value_enum, default_value = "jsonl")]
        format: ScriptFormat,

        /// Include an export timestamp in the header
        #[arg(long)]
        timestamp: bool,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Create a default config file
    Init,
    /// Open the config file in $EDITOR
    Edit,
    /// Add missing keys to an existing config file
    Migrate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            phrases,
            speed,
            cycles,
            banner,
            no_start_delay,
        } => commands::run::handle_run(phrases, speed, cycles, banner, no_start_delay),
        Commands::Count {
            target,
            duration_ms,
            speed,
        } => commands::count::handle_count(target, duration_ms, speed),
        Commands::Script {
            phrases,
            cycles,
            format,
            timestamp,
        } => commands::script::handle_script(phrases, cycles, format, timestamp),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Init => commands::config::handle_init(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Migrate => commands::config::handle_migrate(),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "typist", &mut io::stdout());
            Ok(())
        }
    }
}
