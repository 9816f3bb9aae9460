//! Scoring module - full recompute of frame values and running totals
//!
//! Every total is a pure function of the recorded marks. Nothing is carried
//! between calls, so the engine simply reruns [`score_frames`] after every
//! accepted shot and a bonus that could not be resolved last time is picked
//! up as soon as the shots it needs exist.
//!
//! Rules:
//! - Frames 1-9: a strike or spare is worth 10 plus its bonus, an open frame is
//!   worth its pins.
//! - Spare bonus is the next roll; strike bonus is the next two rolls. Rolls are
//!   counted over the whole game with the strike placeholder skipped.
//! - Frame 10 is worth the pins of its own shots; there is no eleventh frame to
//!   look ahead into.

use arrayvec::ArrayVec;

use crate::frame::Frame;
use crate::types::{Shot, FRAME_COUNT, LAST_FRAME, MAX_ROLLS, PIN_COUNT};

/// Rolls credited to a strike.
pub const STRIKE_BONUS_ROLLS: usize = 2;

/// Rolls credited to a spare.
pub const SPARE_BONUS_ROLLS: usize = 1;

/// One real shot in game order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    pub frame: usize,
    pub shot: Shot,
    /// Pins this shot knocked down (a spare counts the pins it cleared).
    pub pins: u8,
}

/// Value of a single frame, before the running total is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameScore {
    pub base: u16,
    pub bonus: u16,
    /// Every bonus roll this frame is owed has been recorded and the frame is closed.
    pub resolved: bool,
}

impl FrameScore {
    pub fn value(&self) -> u16 {
        self.base + self.bonus
    }
}

/// Flatten every real shot into game order, skipping the strike placeholder.
pub fn flatten_rolls(frames: &[Frame]) -> ArrayVec<Roll, MAX_ROLLS> {
    let mut rolls = ArrayVec::new();
    for (index, frame) in frames.iter().enumerate() {
        for (shot, pins) in frame.rolls() {
            rolls.push(Roll {
                frame: index,
                shot,
                pins,
            });
        }
    }
    rolls
}

/// Pins of up to `count` rolls after position `after`.
///
/// Returns the pin sum and how many rolls actually exist, so a caller can tell
/// a resolved bonus from one still waiting on future shots.
pub fn following_pins(rolls: &[Roll], after: usize, count: usize) -> (u16, usize) {
    rolls
        .iter()
        .skip(after + 1)
        .take(count)
        .fold((0, 0), |(sum, found), roll| {
            (sum + u16::from(roll.pins), found + 1)
        })
}

fn bonus_rolls_owed(shot: Shot) -> usize {
    match shot {
        Shot::Strike => STRIKE_BONUS_ROLLS,
        Shot::Spare => SPARE_BONUS_ROLLS,
        Shot::Pins(_) => 0,
    }
}

/// Score every frame that has at least one mark.
///
/// Frames are filled strictly in order, so the first empty frame ends the pass.
pub fn score_frames(frames: &[Frame; FRAME_COUNT]) -> [Option<FrameScore>; FRAME_COUNT] {
    let rolls = flatten_rolls(frames);
    let mut scores = [None; FRAME_COUNT];
    let mut first_roll = 0;

    for (index, frame) in frames.iter().enumerate() {
        if frame.is_empty() {
            break;
        }

        let closed = frame.is_closed(index);
        let score = if index == LAST_FRAME {
            FrameScore {
                base: frame.pins(),
                bonus: 0,
                resolved: closed,
            }
        } else {
            let mut bonus = 0;
            let mut resolved = closed;
            for (offset, (shot, _)) in frame.rolls().enumerate() {
                let owed = bonus_rolls_owed(shot);
                if owed == 0 {
                    continue;
                }
                let (pins, found) = following_pins(&rolls, first_roll + offset, owed);
                bonus += pins;
                resolved &= found == owed;
            }

            let base = if frame.has_mark() {
                u16::from(PIN_COUNT)
            } else {
                frame.pins()
            };
            FrameScore {
                base,
                bonus,
                resolved,
            }
        };

        scores[index] = Some(score);
        first_roll += frame.shots().count();
    }

    scores
}

/// Cumulative totals; `None` from the first unscored frame onwards.
pub fn running_totals(scores: &[Option<FrameScore>; FRAME_COUNT]) -> [Option<u16>; FRAME_COUNT] {
    let mut totals = [None; FRAME_COUNT];
    let mut running: u16 = 0;
    for (total, score) in totals.iter_mut().zip(scores) {
        let Some(score) = score else {
            break;
        };
        running += score.value();
        *total = Some(running);
    }
    totals
}
