//! Terminal presentation for the bowling scoreboard.
//!
//! The scoreboard is drawn into a plain [`FrameBuffer`] by [`ScoreboardView`]
//! and flushed by [`TerminalRenderer`]. [`text::render_table`] produces the
//! same table as plain text for non-interactive output.

pub mod fb;
pub mod renderer;
pub mod scoreboard_view;
pub mod text;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scoreboard_view::{AnchorY, Screen, ScoreboardView, Viewport};
pub use text::render_table;

/// Narrowest frame column; wide enough for `X | X | X`.
pub const MIN_COLUMN_WIDTH: u16 = 9;
pub const DEFAULT_COLUMN_WIDTH: u16 = 11;
pub const MAX_COLUMN_WIDTH: u16 = 16;
