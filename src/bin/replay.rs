//! Headless scoreboard: feed a shot sequence to the engine and print the result.
//!
//! ```text
//! bowling-replay x 7 / 9 0 x
//! echo "x x x x x x x x x x x x" | bowling-replay --json
//! ```

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use tui_bowling::core::{ScoreboardSnapshot, ScoringEngine, ShotError};
use tui_bowling::term::render_table;
use tui_bowling::AppConfig;

/// Replay bowling shots and print the scoreboard
#[derive(Parser, Debug)]
#[command(name = "bowling-replay")]
#[command(about = "Score a sequence of ten-pin bowling shots", long_about = None)]
#[command(version)]
struct Cli {
    /// Shots: 0-9, '/', 'x' or 'X'. Read whitespace-separated from stdin when omitted.
    shots: Vec<String>,

    /// Print JSON instead of a text table
    #[arg(long)]
    json: bool,

    /// Print the scoreboard after every accepted shot
    #[arg(long)]
    each: bool,

    /// Column width of the text table (defaults to BOWLING_COLUMN_WIDTH)
    #[arg(long)]
    width: Option<u16>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    config.init_stderr_logging();

    let shots = if cli.shots.is_empty() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading shots from stdin")?;
        buf.split_whitespace().map(str::to_string).collect()
    } else {
        cli.shots.clone()
    };

    let width = usize::from(cli.width.unwrap_or(config.column_width));
    let mut out = io::stdout().lock();
    let mut engine = ScoringEngine::new();

    for (index, text) in shots.iter().enumerate() {
        match engine.record_input(text) {
            Ok(snapshot) => {
                if cli.each {
                    print_snapshot(&mut out, &snapshot, cli.json, width)?;
                }
            }
            Err(ShotError::Rejected(reason)) => {
                warn!(shot = index + 1, input = %text, %reason, "shot ignored");
            }
            Err(err @ ShotError::InvalidEncoding(_)) => {
                return Err(err).with_context(|| format!("shot {} ({text:?})", index + 1));
            }
        }
    }

    let snapshot = engine.snapshot();
    if !cli.each {
        print_snapshot(&mut out, &snapshot, cli.json, width)?;
    }
    info!(
        total = snapshot.total().unwrap_or(0),
        game_over = snapshot.game_over,
        "replay finished"
    );
    Ok(())
}

fn print_snapshot(
    out: &mut impl Write,
    snapshot: &ScoreboardSnapshot,
    json: bool,
    width: usize,
) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, snapshot)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_table(snapshot, width))?;
        match (snapshot.game_over, snapshot.total()) {
            (true, Some(total)) => writeln!(out, "Final score: {total}")?,
            (false, Some(total)) => writeln!(out, "Score so far: {total}")?,
            (_, None) => writeln!(out, "No shots yet")?,
        }
    }
    Ok(())
}
