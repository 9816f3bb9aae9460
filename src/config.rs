//! Runtime configuration read from the environment.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::term::{DEFAULT_COLUMN_WIDTH, MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH};

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_TICK_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Log file for the terminal UI; no logging when unset.
    pub log_path: Option<String>,
    /// `EnvFilter` directive.
    pub log_filter: String,
    pub column_width: u16,
    /// Input poll interval of the terminal UI.
    pub tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            column_width: DEFAULT_COLUMN_WIDTH,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let log_path = non_empty("BOWLING_LOG_PATH");
        let log_filter = non_empty("BOWLING_LOG").unwrap_or(defaults.log_filter);

        let column_width = non_empty("BOWLING_COLUMN_WIDTH")
            .and_then(|s| s.parse::<u16>().ok())
            .map(|w| w.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH))
            .unwrap_or(defaults.column_width);

        let tick_ms = non_empty("BOWLING_TICK_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_ms);

        Self {
            log_path,
            log_filter,
            column_width,
            tick_ms,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }

    /// Log to `log_path` if set. The screen owns stdout, so nothing is
    /// installed otherwise.
    pub fn init_file_logging(&self) -> Result<()> {
        let Some(path) = &self.log_path else {
            return Ok(());
        };
        let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .try_init();
        Ok(())
    }

    /// Log to stderr, leaving stdout for program output.
    pub fn init_stderr_logging(&self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), AppConfig::default());
    }

    #[test]
    fn test_reads_values() {
        let cfg = config(&[
            ("BOWLING_LOG_PATH", " /tmp/bowling.log "),
            ("BOWLING_LOG", "tui_bowling_core=debug"),
            ("BOWLING_COLUMN_WIDTH", "13"),
            ("BOWLING_TICK_MS", "20"),
        ]);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/bowling.log"));
        assert_eq!(cfg.log_filter, "tui_bowling_core=debug");
        assert_eq!(cfg.column_width, 13);
        assert_eq!(cfg.tick_ms, 20);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = config(&[
            ("BOWLING_LOG_PATH", "   "),
            ("BOWLING_COLUMN_WIDTH", "wide"),
            ("BOWLING_TICK_MS", "0"),
        ]);
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_column_width_is_clamped() {
        assert_eq!(config(&[("BOWLING_COLUMN_WIDTH", "3")]).column_width, MIN_COLUMN_WIDTH);
        assert_eq!(config(&[("BOWLING_COLUMN_WIDTH", "99")]).column_width, MAX_COLUMN_WIDTH);
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = AppConfig::from_env();
    }
}
