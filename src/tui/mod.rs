//! TUI module for typist
//!
//! Terminal UI components built on ratatui/crossterm: the full-screen banner
//! mode and the shared theme definitions.

pub mod banner_app;
pub mod theme;

// Re-export for commands and external use
pub use banner_app::BannerApp;
pub use theme::{current_theme, Theme};
