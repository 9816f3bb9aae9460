//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate holds the ten-pin scoring rules and the game state machine. It
//! has **no dependencies** on terminals or I/O:
//!
//! - **Deterministic**: totals are a pure function of the recorded shots
//! - **Recomputed**: the scoreboard is rebuilt from scratch after every shot,
//!   so a pending strike or spare bonus resolves as soon as its shots exist
//! - **Allocation-light**: frames and the roll sequence live inline
//!
//! # Module Structure
//!
//! - [`frame`]: marks recorded in one frame, rack tracking, closure rules
//! - [`scoring`]: frame values, bonus lookahead, running totals
//! - [`engine`]: [`ScoringEngine`], the shot validator and frame cursor
//! - [`snapshot`]: [`ScoreboardSnapshot`], the renderable output
//! - [`error`]: [`RejectedShot`] and [`ShotError`]
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::{RejectedShot, ScoringEngine};
//! use tui_bowling_types::Shot;
//!
//! let mut engine = ScoringEngine::new();
//! engine.record_input("5").unwrap();
//! let snap = engine.record_shot(Shot::Spare).unwrap();
//! assert_eq!(snap.frames[0].label(), "5 | /");
//!
//! // A strike cannot follow the first ball of the same frame.
//! engine.record_input("3").unwrap();
//! assert_eq!(engine.record_shot(Shot::Strike), Err(RejectedShot::StrikeAfterFirstShot));
//!
//! assert_eq!(engine.snapshot().frames[0].total, Some(13));
//! ```

pub mod engine;
pub mod error;
pub mod frame;
pub mod scoring;
pub mod snapshot;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use engine::{GameStatus, ScoringEngine};
pub use error::{RejectedShot, ShotError};
pub use frame::{Frame, Rack};
pub use scoring::{running_totals, score_frames, FrameScore, Roll};
pub use snapshot::{FrameSnapshot, ScoreboardSnapshot};
