//! TUI Bowling (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_bowling::{core,input,term,types}` and owns the
//! runtime configuration shared by the binaries.

pub mod config;

pub use tui_bowling_core as core;
pub use tui_bowling_input as input;
pub use tui_bowling_term as term;
pub use tui_bowling_types as types;

pub use config::AppConfig;
