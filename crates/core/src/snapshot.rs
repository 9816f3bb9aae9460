use arrayvec::ArrayVec;
use serde::Serialize;

use crate::frame::{mark_label, Frame};
use crate::scoring::FrameScore;
use crate::types::{Mark, FRAME_COUNT, MAX_LAST_FRAME_MARKS};

/// One column of the scoreboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FrameSnapshot {
    pub marks: ArrayVec<Mark, MAX_LAST_FRAME_MARKS>,
    /// Cumulative total through this frame; `None` until the frame has a shot.
    pub total: Option<u16>,
    /// `false` while the total still waits on bonus shots or the frame is open.
    pub resolved: bool,
}

impl FrameSnapshot {
    pub fn label(&self) -> String {
        mark_label(&self.marks)
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub(crate) fn fill(&mut self, frame: &Frame, score: Option<FrameScore>, total: Option<u16>) {
        self.marks.clear();
        self.marks.extend(frame.marks().iter().copied());
        self.total = total;
        self.resolved = score.map_or(false, |s| s.resolved);
    }
}

/// Renderable scoreboard state, rebuilt from scratch after every accepted shot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ScoreboardSnapshot {
    pub frames: [FrameSnapshot; FRAME_COUNT],
    /// Frame that accepts the next shot (0-9).
    pub current_frame: u8,
    pub game_over: bool,
}

impl ScoreboardSnapshot {
    /// Latest cumulative total, if any frame has been scored.
    pub fn total(&self) -> Option<u16> {
        self.frames.iter().rev().find_map(|f| f.total)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Shot;

    #[test]
    fn test_default_is_blank() {
        let snap = ScoreboardSnapshot::default();
        assert!(snap.frames.iter().all(FrameSnapshot::is_empty));
        assert_eq!(snap.total(), None);
        assert_eq!(snap.current_frame, 0);
        assert!(snap.playable());
    }

    #[test]
    fn test_frame_label_and_total() {
        let mut snap = ScoreboardSnapshot::default();
        snap.frames[0].marks.push(Mark::Shot(Shot::Strike));
        snap.frames[0].marks.push(Mark::NoRoll);
        snap.frames[0].total = Some(10);

        assert_eq!(snap.frames[0].label(), "X | _");
        assert_eq!(snap.frames[1].label(), "");
        assert_eq!(snap.total(), Some(10));
    }

    #[test]
    fn test_serializes_marks_as_text() {
        let mut snap = ScoreboardSnapshot::default();
        snap.frames[0].marks.push(Mark::Shot(Shot::pins(5).unwrap()));
        snap.frames[0].marks.push(Mark::Shot(Shot::Spare));
        snap.frames[0].total = Some(10);

        let value = serde_json::to_value(&snap).unwrap();
        assert_eq!(value["frames"][0]["marks"], serde_json::json!(["5", "/"]));
        assert_eq!(value["frames"][0]["total"], 10);
        assert_eq!(value["frames"][1]["total"], serde_json::Value::Null);
        assert_eq!(value["current_frame"], 0);
        assert_eq!(value["game_over"], false);
    }
}
