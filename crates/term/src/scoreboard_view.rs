//! ScoreboardView: maps a `core::ScoreboardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{RejectedShot, ScoreboardSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::text::total_text;
use crate::types::FRAME_COUNT;
use crate::{DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};

pub const TITLE: &str = "BOWLING SCOREBOARD";
pub const PROMPT: &str = "Please, enter scores below. Acceptable values: '0-9', '/', 'x', 'X'";
pub const GAME_OVER: &str = "This game is over! To start over press 'r'";
pub const HELP: &str = "Enter submit   Backspace erase   r reset   q quit";

/// Rows used by the full layout.
pub const LAYOUT_HEIGHT: u16 = 13;

const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const HEADER: CellStyle = CellStyle::fg(Rgb::new(150, 150, 170));
const SHOTS: CellStyle = CellStyle::fg(Rgb::new(240, 220, 80));
const TOTAL: CellStyle = CellStyle::fg(Rgb::new(235, 235, 235));
const CURRENT_BG: Rgb = Rgb::new(40, 40, 70);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Everything one screen shows.
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
    pub snapshot: &'a ScoreboardSnapshot,
    /// Current content of the shot field.
    pub input: &'a str,
    /// Why the last submitted shot was ignored, if it was.
    pub rejection: Option<RejectedShot>,
}

/// Ten-column scoreboard table with prompt, entry field and help line.
pub struct ScoreboardView {
    /// Inner width of one frame column.
    column_width: u16,
    anchor_y: AnchorY,
}

impl Default for ScoreboardView {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMN_WIDTH)
    }
}

impl ScoreboardView {
    pub fn new(column_width: u16) -> Self {
        Self {
            column_width: column_width.max(MIN_COLUMN_WIDTH),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn column_width(&self) -> u16 {
        self.column_width
    }

    /// Width of the bordered table in terminal columns.
    pub fn table_width(&self) -> u16 {
        FRAME_COUNT as u16 * (self.column_width + 1) + 1
    }

    /// Left edge of frame column `col` relative to the table origin.
    fn column_x(&self, col: usize) -> u16 {
        1 + col as u16 * (self.column_width + 1)
    }

    pub fn render(&self, screen: &Screen<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, screen: &Screen<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let table_w = self.table_width();
        let x = viewport.width.saturating_sub(table_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(LAYOUT_HEIGHT) / 2,
            AnchorY::Top => 0,
        };
        let snap = screen.snapshot;

        fb.put_str_centered(x, table_w, y, TITLE, TOTAL.bold());

        let grid_y = y + 2;
        self.draw_rule(fb, x, grid_y, ['┌', '┬', '┐']);
        self.draw_rule(fb, x, grid_y + 2, ['├', '┼', '┤']);
        self.draw_rule(fb, x, grid_y + 5, ['└', '┴', '┘']);
        for row in [grid_y + 1, grid_y + 3, grid_y + 4] {
            for col in 0..=FRAME_COUNT {
                fb.put_char(x + self.column_x(col) - 1, row, '│', BORDER);
            }
        }

        for (col, frame) in snap.frames.iter().enumerate() {
            let cx = x + self.column_x(col);
            let w = self.column_width;
            let current = !snap.game_over && col == snap.current_frame as usize;
            let bg = if current { CURRENT_BG } else { Rgb::default() };

            for row in [grid_y + 1, grid_y + 3, grid_y + 4] {
                fb.fill_rect(cx, row, w, 1, ' ', CellStyle::default().on(bg));
            }

            let header = if current { HEADER.bold() } else { HEADER };
            fb.put_str_centered(cx, w, grid_y + 1, &(col + 1).to_string(), header.on(bg));
            fb.put_str_centered(cx, w, grid_y + 3, &frame.label(), SHOTS.bold().on(bg));

            let total_style = if frame.resolved { TOTAL.bold() } else { TOTAL.dim() };
            fb.put_str_centered(cx, w, grid_y + 4, &total_text(frame), total_style.on(bg));
        }

        let status_y = grid_y + 7;
        let (status, style) = status_line(screen);
        fb.put_str_centered(x, table_w, status_y, &status, style);

        self.draw_field(fb, x, table_w, status_y + 1, screen);

        fb.put_str_centered(x, table_w, status_y + 3, HELP, HEADER.dim());
    }

    fn draw_rule(&self, fb: &mut FrameBuffer, x: u16, y: u16, [left, mid, right]: [char; 3]) {
        fb.put_char(x, y, left, BORDER);
        for col in 0..FRAME_COUNT {
            let cx = x + self.column_x(col);
            fb.fill_rect(cx, y, self.column_width, 1, '─', BORDER);
            let junction = if col + 1 == FRAME_COUNT { right } else { mid };
            fb.put_char(cx + self.column_width, y, junction, BORDER);
        }
    }

    fn draw_field(&self, fb: &mut FrameBuffer, x: u16, w: u16, y: u16, screen: &Screen<'_>) {
        const LABEL: &str = "Shot: ";
        const FIELD_W: u16 = 4;

        let start = x.saturating_add(w.saturating_sub(LABEL.len() as u16 + FIELD_W) / 2);
        fb.put_str(start, y, LABEL, HEADER);

        let field_x = start + LABEL.len() as u16;
        let field_bg = CellStyle::default().on(Rgb::new(50, 50, 60));
        fb.fill_rect(field_x, y, FIELD_W, 1, ' ', field_bg);
        fb.put_str(field_x, y, screen.input, SHOTS.bold().on(field_bg.bg));
        if screen.snapshot.playable() {
            let cursor_x = field_x + screen.input.chars().count() as u16;
            if cursor_x < field_x + FIELD_W {
                fb.put_char(cursor_x, y, '▏', TOTAL.on(field_bg.bg));
            }
        }
    }
}

fn status_line(screen: &Screen<'_>) -> (String, CellStyle) {
    if screen.snapshot.game_over {
        let total = screen.snapshot.total().unwrap_or(0);
        (
            format!("{GAME_OVER}  (final score {total})"),
            CellStyle::fg(Rgb::new(255, 255, 255)).bold(),
        )
    } else if let Some(reason) = screen.rejection {
        (
            format!("Shot ignored: {reason}"),
            CellStyle::fg(Rgb::new(230, 120, 100)),
        )
    } else {
        (PROMPT.to_string(), HEADER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoringEngine;

    fn screen_rows(engine: &ScoringEngine, input: &str, rejection: Option<RejectedShot>) -> Vec<String> {
        let snap = engine.snapshot();
        let screen = Screen {
            snapshot: &snap,
            input,
            rejection,
        };
        let view = ScoreboardView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&screen, Viewport::new(130, LAYOUT_HEIGHT));
        (0..fb.height()).map(|y| fb.row_text(y)).collect()
    }

    #[test]
    fn test_table_fits_default_width() {
        let view = ScoreboardView::default();
        assert_eq!(view.table_width(), 10 * (DEFAULT_COLUMN_WIDTH + 1) + 1);
        assert_eq!(ScoreboardView::new(2).column_width(), MIN_COLUMN_WIDTH);
    }

    #[test]
    fn test_renders_labels_and_totals() {
        let mut engine = ScoringEngine::new();
        for shot in ["5", "/", "3", "4"] {
            engine.record_input(shot).unwrap();
        }
        let rows = screen_rows(&engine, "", None);
        assert!(rows[0].contains(TITLE));
        assert!(rows[3].contains("│     1     │     2     │"));
        assert!(rows[5].contains("│   5 | /   │   3 | 4   │"));
        assert!(rows[6].contains("│    13     │    20     │"));
        assert!(rows[9].contains(PROMPT));
    }

    #[test]
    fn test_shows_rejection_and_input() {
        let engine = ScoringEngine::new();
        let rows = screen_rows(&engine, "7", Some(RejectedShot::SpareWithoutFirstShot));
        assert!(rows[9].contains("Shot ignored: a spare needs a first shot in the frame"));
        assert!(rows[10].contains("Shot: 7"));
    }

    #[test]
    fn test_shows_game_over() {
        let mut engine = ScoringEngine::new();
        for _ in 0..12 {
            engine.record_input("x").unwrap();
        }
        let rows = screen_rows(&engine, "", None);
        assert!(rows[5].contains("X | X | X"));
        assert!(rows[6].contains("300"));
        assert!(rows[9].contains(GAME_OVER));
        assert!(rows[9].contains("final score 300"));
    }

    #[test]
    fn test_current_frame_is_highlighted() {
        let mut engine = ScoringEngine::new();
        engine.record_input("x").unwrap();
        let snap = engine.snapshot();
        let screen = Screen {
            snapshot: &snap,
            input: "",
            rejection: None,
        };
        let view = ScoreboardView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&screen, Viewport::new(view.table_width(), LAYOUT_HEIGHT));

        let second_col = view.column_x(1);
        let first_col = view.column_x(0);
        assert_eq!(fb.get(second_col, 5).unwrap().style.bg, CURRENT_BG);
        assert_ne!(fb.get(first_col, 5).unwrap().style.bg, CURRENT_BG);
    }

    #[test]
    fn test_pending_total_is_dimmed() {
        let mut engine = ScoringEngine::new();
        engine.record_input("x").unwrap();
        let snap = engine.snapshot();
        let screen = Screen {
            snapshot: &snap,
            input: "",
            rejection: None,
        };
        let view = ScoreboardView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&screen, Viewport::new(view.table_width(), LAYOUT_HEIGHT));
        let row = fb.row_text(6);
        let offset = row.chars().position(|c| c == '1').unwrap() as u16;
        assert!(fb.get(offset, 6).unwrap().style.dim);
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let engine = ScoringEngine::new();
        let snap = engine.snapshot();
        let screen = Screen {
            snapshot: &snap,
            input: "x",
            rejection: None,
        };
        let fb = ScoreboardView::default().render(&screen, Viewport::new(10, 3));
        assert_eq!((fb.width(), fb.height()), (10, 3));
    }
}
