//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` key
//! events. It maps keys into [`InputEvent`]s and provides [`ShotField`], the
//! single-line entry field that only ever holds text the shot encoding accepts.

pub mod field;
pub mod map;

pub use tui_bowling_types as types;

pub use field::ShotField;
pub use map::{handle_key_event, should_quit, InputEvent};
