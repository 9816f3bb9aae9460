//! Scoring engine - the game state machine
//!
//! The engine owns the ten frames and the frame cursor. Each accepted shot is
//! appended to the current frame, the whole scoreboard is recomputed from the
//! recorded marks, and the cursor advances once the frame closes. Rejected
//! shots leave every field untouched.
//!
//! States are `InProgress(frame)` for frames 0-9 and `GameOver`; only
//! [`ScoringEngine::reset`] leaves `GameOver`.

use tracing::{debug, info, instrument};

use crate::error::{RejectedShot, ShotError};
use crate::frame::Frame;
use crate::scoring::{running_totals, score_frames};
use crate::snapshot::ScoreboardSnapshot;
use crate::types::{Mark, Shot, FRAME_COUNT, LAST_FRAME, PIN_COUNT};

/// Where the game is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { frame: usize },
    GameOver,
}

/// Single-player ten-frame scorer.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    frames: [Frame; FRAME_COUNT],
    current_frame: usize,
    game_over: bool,
    snapshot: ScoreboardSnapshot,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            frames: Default::default(),
            current_frame: 0,
            game_over: false,
            snapshot: ScoreboardSnapshot::default(),
        }
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else {
            GameStatus::InProgress {
                frame: self.current_frame,
            }
        }
    }

    /// Latest cumulative total.
    pub fn total(&self) -> Option<u16> {
        self.snapshot.total()
    }

    /// Refresh a caller-owned snapshot in place.
    pub fn snapshot_into(&self, out: &mut ScoreboardSnapshot) {
        out.clone_from(&self.snapshot);
    }

    pub fn snapshot(&self) -> ScoreboardSnapshot {
        self.snapshot.clone()
    }

    /// Check a shot against the current frame without recording it.
    ///
    /// - a spare needs any earlier shot in the frame;
    /// - a strike must open frames 1-9, but may come at any point of the tenth;
    /// - a pin count plus the frame's first pin count must stay below ten.
    pub fn check_shot(&self, shot: Shot) -> Result<(), RejectedShot> {
        if self.game_over {
            return Err(RejectedShot::GameOver);
        }

        let frame = &self.frames[self.current_frame];
        match shot {
            Shot::Spare if frame.is_empty() => Err(RejectedShot::SpareWithoutFirstShot),
            Shot::Strike if !frame.is_empty() && self.current_frame < LAST_FRAME => {
                Err(RejectedShot::StrikeAfterFirstShot)
            }
            Shot::Pins(n) => match frame.first_pins() {
                Some(first) if first + n.get() >= PIN_COUNT => Err(RejectedShot::TooManyPins {
                    first,
                    second: n.get(),
                }),
                _ => Ok(()),
            },
            _ => Ok(()),
        }
    }

    /// Record one shot and return the recomputed scoreboard.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectedShot`] reason when the shot is illegal in the
    /// current frame or the game is over. Nothing is mutated in that case.
    #[instrument(level = "debug", skip(self), fields(frame = self.current_frame))]
    pub fn record_shot(&mut self, shot: Shot) -> Result<ScoreboardSnapshot, RejectedShot> {
        if let Err(reason) = self.check_shot(shot) {
            debug!(%reason, "shot rejected");
            return Err(reason);
        }

        let index = self.current_frame;
        let frame = &mut self.frames[index];
        frame.push(Mark::Shot(shot));
        if shot == Shot::Strike && frame.len() == 1 && index < LAST_FRAME {
            frame.push(Mark::NoRoll);
        }

        if frame.is_closed(index) {
            if index < LAST_FRAME {
                self.current_frame += 1;
            } else {
                self.game_over = true;
            }
        }

        self.recompute();

        if self.game_over {
            info!(total = self.total().unwrap_or(0), "game over");
        }
        Ok(self.snapshot())
    }

    /// Parse the text encoding and record the shot.
    ///
    /// Empty text is rejected as [`RejectedShot::NoInput`]; text outside the
    /// encoding is reported as [`ShotError::InvalidEncoding`].
    pub fn record_input(&mut self, raw: &str) -> Result<ScoreboardSnapshot, ShotError> {
        if self.game_over {
            return Err(RejectedShot::GameOver.into());
        }
        match Shot::parse(raw)? {
            Some(shot) => Ok(self.record_shot(shot)?),
            None => Err(RejectedShot::NoInput.into()),
        }
    }

    /// Discard every shot and start over at the first frame.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) -> ScoreboardSnapshot {
        *self = Self::new();
        self.snapshot()
    }

    fn recompute(&mut self) {
        let scores = score_frames(&self.frames);
        let totals = running_totals(&scores);

        for (index, out) in self.snapshot.frames.iter_mut().enumerate() {
            out.fill(&self.frames[index], scores[index], totals[index]);
        }
        self.snapshot.current_frame = self.current_frame as u8;
        self.snapshot.game_over = self.game_over;
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
