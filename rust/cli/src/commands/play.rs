//! Play command handler: run one match and show it.
//!
//! Text format prints the console narrative from [`crate::formatters`];
//! JSON format prints each [`MatchEvent`] as one line. With `--output` the
//! finished [`MatchRecord`] is appended to a JSONL file.

use crate::config::{self, OutputFormat};
use crate::error::CliError;
use crate::formatters::render_text;
use autodeck_engine::engine::Engine;
use autodeck_engine::events::MatchEvent;
use autodeck_engine::logger::{MatchLogger, MatchRecord};
use std::io::Write;
use tracing::info;

/// Handle the play command.
///
/// Flags win over configuration; without any seed a random one is drawn and
/// reported so the match can be replayed.
///
/// # Errors
///
/// - `CliError::Config` when the configuration cannot be resolved
/// - `CliError::Engine` when the engine abandons the match
/// - `CliError::Io` on write failures
pub fn handle_play_command(
    seed: Option<u64>,
    format: Option<OutputFormat>,
    output: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let format = format.unwrap_or(cfg.format);
    info!(seed, format = format.as_str(), "playing match");

    let mut engine = Engine::new(seed);
    let mut events: Vec<MatchEvent> = Vec::new();
    let result = engine.run(&mut events);

    // show what happened even when the engine gave up midway
    match format {
        OutputFormat::Text => {
            writeln!(out, "Seed: {}", seed)?;
            for line in render_text(&events) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            for event in &events {
                let line = serde_json::to_string(event).map_err(std::io::Error::other)?;
                writeln!(out, "{}", line)?;
            }
        }
    }
    result?;

    if let Some(path) = output {
        let mut logger = MatchLogger::append(&path)?;
        let id = logger.next_id();
        if let Some(record) = MatchRecord::from_events(id, Some(seed), events) {
            logger.write(&record)?;
        }
    }
    Ok(())
}
