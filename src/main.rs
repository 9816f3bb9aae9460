//! Terminal bowling scoreboard (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `tui_bowling::term`.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_bowling::core::{RejectedShot, ScoreboardSnapshot, ScoringEngine, ShotError};
use tui_bowling::input::{handle_key_event, should_quit, InputEvent, ShotField};
use tui_bowling::term::{FrameBuffer, Screen, ScoreboardView, TerminalRenderer, Viewport};
use tui_bowling::AppConfig;

/// Everything the run loop owns between frames.
struct App {
    engine: ScoringEngine,
    snapshot: ScoreboardSnapshot,
    field: ShotField,
    rejection: Option<RejectedShot>,
}

impl App {
    fn new() -> Self {
        let engine = ScoringEngine::new();
        let snapshot = engine.snapshot();
        Self {
            engine,
            snapshot,
            field: ShotField::new(),
            rejection: None,
        }
    }

    fn screen(&self) -> Screen<'_> {
        Screen {
            snapshot: &self.snapshot,
            input: self.field.text(),
            rejection: self.rejection,
        }
    }

    fn apply(&mut self, input: InputEvent) -> Result<()> {
        match input {
            InputEvent::Type(ch) => {
                if self.snapshot.playable() {
                    self.field.insert(ch);
                }
            }
            InputEvent::Erase => self.field.erase(),
            InputEvent::Submit => self.submit()?,
            InputEvent::Reset => {
                self.snapshot = self.engine.reset();
                self.field.clear();
                self.rejection = None;
                info!("new game");
            }
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        let text = self.field.take();
        match self.engine.record_input(&text) {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.rejection = None;
            }
            Err(ShotError::Rejected(reason)) => {
                warn!(%reason, input = %text, "shot ignored");
                self.rejection = Some(reason);
            }
            Err(err @ ShotError::InvalidEncoding(_)) => return Err(err.into()),
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config.init_file_logging()?;
    info!(?config, "starting scoreboard");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let view = ScoreboardView::new(config.column_width);
    let poll = Duration::from_millis(config.tick_ms);
    let mut app = App::new();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&app.screen(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if !event::poll(poll)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(total = app.snapshot.total().unwrap_or(0), "quit");
                    return Ok(());
                }
                if let Some(input) = handle_key_event(key) {
                    app.apply(input)?;
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
