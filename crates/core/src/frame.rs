//! Frame module - the marks recorded in one of the ten frames
//!
//! A frame never validates anything itself; the engine decides what may be
//! pushed. The frame only answers questions about what it holds.

use arrayvec::ArrayVec;

use crate::types::{
    Mark, Shot, LAST_FRAME, MAX_FRAME_MARKS, MAX_LAST_FRAME_MARKS, PIN_COUNT,
};

/// Pins facing the next ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rack {
    /// All ten pins standing.
    Fresh,
    /// A first ball knocked down this many pins.
    Standing(u8),
}

impl Rack {
    /// Roll `shot` at this rack.
    ///
    /// Returns the pins it knocked down and the rack left for the next ball.
    /// A strike or spare clears whatever is standing and leaves a fresh rack
    /// (only observable in the tenth frame); a second numeric ball finishes
    /// the rack.
    pub fn roll(self, shot: Shot) -> (u8, Rack) {
        match (self, shot) {
            (Rack::Fresh, Shot::Pins(n)) => (n.get(), Rack::Standing(n.get())),
            (Rack::Fresh, Shot::Spare) => (PIN_COUNT, Rack::Fresh),
            (Rack::Standing(_), Shot::Pins(n)) => (n.get(), Rack::Fresh),
            (Rack::Standing(knocked), Shot::Spare) => {
                (PIN_COUNT.saturating_sub(knocked), Rack::Fresh)
            }
            (_, Shot::Strike) => (PIN_COUNT, Rack::Fresh),
        }
    }
}

/// The marks recorded in one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    marks: ArrayVec<Mark, MAX_LAST_FRAME_MARKS>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Real shots, sentinel skipped.
    pub fn shots(&self) -> impl Iterator<Item = Shot> + '_ {
        self.marks.iter().filter_map(Mark::shot)
    }

    /// Real shots paired with the pins each one knocked down.
    pub fn rolls(&self) -> impl Iterator<Item = (Shot, u8)> + '_ {
        self.shots().scan(Rack::Fresh, |rack, shot| {
            let (pins, next) = rack.roll(shot);
            *rack = next;
            Some((shot, pins))
        })
    }

    /// Pins of the first numeric shot in this frame.
    pub fn first_pins(&self) -> Option<u8> {
        self.shots().find_map(|shot| match shot {
            Shot::Pins(n) => Some(n.get()),
            _ => None,
        })
    }

    /// Contains a strike or spare.
    pub fn has_mark(&self) -> bool {
        self.shots().any(|shot| shot.is_mark())
    }

    /// Sum of pins knocked down in this frame alone.
    pub fn pins(&self) -> u16 {
        self.rolls().map(|(_, pins)| u16::from(pins)).sum()
    }

    /// Whether frame `index` accepts no further marks.
    ///
    /// Frames 0-8 close at two marks. The tenth closes at three marks, or at
    /// two when neither shot was a strike or spare.
    pub fn is_closed(&self, index: usize) -> bool {
        if index < LAST_FRAME {
            self.marks.len() >= MAX_FRAME_MARKS
        } else {
            self.marks.len() >= MAX_LAST_FRAME_MARKS
                || (self.marks.len() == MAX_FRAME_MARKS && !self.has_mark())
        }
    }

    pub(crate) fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }
}

pub(crate) fn mark_label(marks: &[Mark]) -> String {
    let mut out = String::with_capacity(marks.len() * 4);
    for (i, mark) in marks.iter().enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        out.push(mark.as_char());
    }
    out
}
