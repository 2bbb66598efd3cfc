//! Frame rendering sinks.
//!
//! A [`Sink`] receives each frame's text as it is produced. The inline
//! renderer rewrites a single terminal line in place; [`MemorySink`] captures
//! frames for tests and the `script` command.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use unicode_width::UnicodeWidthChar;

use crate::tui::theme::Theme;

/// Block glyph drawn after the text, standing in for the caret.
const CARET: &str = "\u{258c}"; // ▌

/// Receives rendered frames, one per tick.
pub trait Sink {
    /// Display `text`, replacing the previous frame.
    fn render(&mut self, text: &str) -> io::Result<()>;

    /// Called once after the last frame.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Captures frames in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    frames: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames rendered so far, in order.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl Sink for MemorySink {
    fn render(&mut self, text: &str) -> io::Result<()> {
        self.frames.push(text.to_string());
        Ok(())
    }
}

/// Rewrites the current terminal line in place, with a colored caret glyph.
///
/// Hides the hardware cursor while active and restores it on `finish` (and
/// on drop, so an interrupted run does not leave the cursor invisible).
pub struct InlineRenderer {
    out: Stdout,
    theme: Theme,
    cursor_hidden: bool,
}

impl InlineRenderer {
    pub fn new(theme: Theme) -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(out, cursor::Hide)?;
        Ok(Self {
            out,
            theme,
            cursor_hidden: true,
        })
    }

    fn width_budget() -> usize {
        match terminal_size::terminal_size() {
            // Leave room for the caret glyph.
            Some((terminal_size::Width(cols), _)) => (cols as usize).saturating_sub(2),
            None => 78,
        }
    }
}

impl Sink for InlineRenderer {
    fn render(&mut self, text: &str) -> io::Result<()> {
        let text = truncate_to_width(text, Self::width_budget());
        execute!(self.out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        write!(
            self.out,
            "{}{}",
            self.theme.primary_text(&text),
            self.theme.accent_text(CARET)
        )?;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            execute!(self.out, cursor::Show)?;
            self.cursor_hidden = false;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl Drop for InlineRenderer {
    fn drop(&mut self) {
        if self.cursor_hidden {
            let _ = execute!(self.out, cursor::Show);
        }
    }
}

/// Restore the hardware cursor on stdout (for interrupt handlers).
pub fn show_cursor() {
    let _ = execute!(io::stdout(), cursor::Show);
}

/// Truncate `text` to at most `max_width` terminal columns.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        result.push(ch);
    }
    result
}
