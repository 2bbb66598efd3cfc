//! CLI command handlers
//!
//! Thin layer between clap argument structs and the library: each handler
//! loads config, builds the effect, and drives or exports it.

pub mod config;
pub mod count;
pub mod run;
pub mod script;
