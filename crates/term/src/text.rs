//! Plain-text scoreboard table for non-interactive output.

use crate::core::{FrameSnapshot, ScoreboardSnapshot};
use crate::types::FRAME_COUNT;
use crate::MIN_COLUMN_WIDTH;

/// Render the scoreboard as a three-row ASCII table.
///
/// ```text
/// +-----------+-----------+
/// |     1     |     2     |
/// +-----------+-----------+
/// |   5 | /   |   3 | 4   |
/// |    13     |    20     |
/// +-----------+-----------+
/// ```
///
/// Totals still waiting on bonus shots are suffixed with `*`.
pub fn render_table(snap: &ScoreboardSnapshot, column_width: usize) -> String {
    let width = column_width.max(MIN_COLUMN_WIDTH as usize);
    let rule = rule(width);

    let mut out = String::new();
    out.push_str(&rule);
    push_row(&mut out, width, (1..=FRAME_COUNT).map(|n| n.to_string()));
    out.push_str(&rule);
    push_row(&mut out, width, snap.frames.iter().map(FrameSnapshot::label));
    push_row(&mut out, width, snap.frames.iter().map(total_text));
    out.push_str(&rule);
    out
}

/// Total as displayed, `*` marking a provisional value.
pub fn total_text(frame: &FrameSnapshot) -> String {
    match frame.total {
        Some(total) if frame.resolved => total.to_string(),
        Some(total) => format!("{total}*"),
        None => String::new(),
    }
}

fn rule(width: usize) -> String {
    let mut line = String::from("+");
    for _ in 0..FRAME_COUNT {
        line.push_str(&"-".repeat(width));
        line.push('+');
    }
    line.push('\n');
    line
}

fn push_row(out: &mut String, width: usize, cells: impl Iterator<Item = String>) {
    out.push('|');
    for cell in cells {
        out.push_str(&format!("{cell:^width$}|"));
    }
    out.push('\n');
}
