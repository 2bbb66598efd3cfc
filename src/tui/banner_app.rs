//! Full-screen banner application
//!
//! Renders the typewriter centered on an alternate screen. Waits between
//! ticks with `event::poll`, so keys interrupt even the long hold delays.
//! Keys: `q`/`Esc`/`Ctrl-C` quit, `Space` pauses, `+`/`-` adjust speed.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;

use super::theme::Theme;
use crate::effect::{Effect, Typewriter};
use crate::runner::{scale_delay, MAX_SPEED, MIN_SPEED};

/// Caret glyph shown after the animated text.
const CARET: &str = "\u{258c}";

/// Poll granularity while paused (keeps the UI responsive to resize/keys).
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputResult {
    Continue,
    Quit,
}

/// Banner application state.
pub struct BannerApp {
    typer: Typewriter,
    theme: Theme,
    speed: f64,
    paused: bool,
    current: String,
    /// Delay produced by the last tick (rescheduled on resume)
    pending_delay: Duration,
    next_tick: Instant,
}

impl BannerApp {
    /// Create the app; the first tick fires after the typer's start delay.
    pub fn new(typer: Typewriter, theme: Theme, speed: f64) -> Self {
        let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        let start = scale_delay(typer.start_delay(), speed);
        Self {
            typer,
            theme,
            speed,
            paused: false,
            current: String::new(),
            pending_delay: Duration::ZERO,
            next_tick: Instant::now() + start,
        }
    }

    /// Enter the alternate screen and run until the user quits.
    #[cfg(not(tarpaulin_include))]
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    #[cfg(not(tarpaulin_include))]
    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = if self.paused {
                POLL_INTERVAL
            } else {
                self.next_tick
                    .saturating_duration_since(Instant::now())
                    .min(POLL_INTERVAL)
            };
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) == InputResult::Quit {
                            return Ok(());
                        }
                    }
                    // Redrawn with fresh dimensions on the next loop pass
                    Event::Resize(..) => {}
                    _ => {}
                }
            }

            if !self.paused && Instant::now() >= self.next_tick && !self.advance() {
                return Ok(());
            }
        }
    }

    /// Take one tick and schedule the next.
    ///
    /// Returns false once the typer's cycle limit is reached.
    fn advance(&mut self) -> bool {
        let frame = match self.typer.step() {
            Some(frame) => frame,
            None => return false,
        };
        self.current = frame.text;
        self.pending_delay = frame.delay;
        self.next_tick = Instant::now() + scale_delay(frame.delay, self.speed);
        true
    }

    fn handle_key(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            // === Quit ===
            KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputResult::Quit
            }

            // === Pause / resume ===
            KeyCode::Char(' ') => {
                self.paused = !self.paused;
                if !self.paused {
                    // Reset timing on resume: wait the pending delay afresh.
                    self.next_tick = Instant::now() + scale_delay(self.pending_delay, self.speed);
                }
                InputResult::Continue
            }

            // === Speed ===
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.speed = (self.speed * 1.5).min(MAX_SPEED);
                InputResult::Continue
            }
            KeyCode::Char('-') => {
                self.speed = (self.speed / 1.5).max(MIN_SPEED);
                InputResult::Continue
            }

            _ => InputResult::Continue,
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let [_, middle, _, footer] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.draw_phrase(frame, middle);
        self.draw_footer(frame, footer);
    }

    fn draw_phrase(&self, frame: &mut ratatui::Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(self.current.clone(), self.theme.text_style()),
            Span::styled(CARET, self.theme.accent_style()),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame, area: Rect) {
        let mut hints = format!("space pause | +/- speed ({:.1}x) | q quit", self.speed);
        if self.paused {
            hints.push_str("  [paused]");
        }
        let footer = Paragraph::new(Line::from(Span::styled(
            hints,
            self.theme.text_secondary_style(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }
}
