//! Simulation command handler: many matches, one summary.
//!
//! Match `i` is played with seed `base + i`, so a run is reproducible from its
//! base seed alone.

use crate::config;
use crate::error::CliError;
use crate::ui;
use autodeck_engine::engine::Engine;
use autodeck_engine::events::{MatchEvent, NullSink};
use autodeck_engine::game::{EndReason, MatchResult, Outcome, PLAYER_COUNT};
use autodeck_engine::logger::{MatchLogger, MatchRecord};
use std::io::Write;
use tracing::debug;

/// Aggregate over a batch of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimSummary {
    pub matches: u32,
    pub wins: [u32; PLAYER_COUNT],
    pub ties: u32,
    pub total_turns: u64,
    pub turn_limited: u32,
}

impl SimSummary {
    pub fn record(&mut self, result: &MatchResult) {
        self.matches += 1;
        match result.outcome {
            Outcome::Winner(p) => self.wins[p.0] += 1,
            Outcome::Tie => self.ties += 1,
        }
        self.total_turns += u64::from(result.turns);
        if result.reason == EndReason::TurnLimit {
            self.turn_limited += 1;
        }
    }

    pub fn average_turns(&self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            self.total_turns as f64 / f64::from(self.matches)
        }
    }
}

/// Handle the sim command.
///
/// # Arguments
///
/// * `matches` - Number of matches; falls back to configuration
/// * `seed` - Base seed; falls back to configuration, then to a random seed
/// * `output` - Optional JSONL file receiving one record per match
/// * `out` - Summary output
/// * `err` - Warnings
pub fn handle_sim_command(
    matches: Option<u32>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let total = matches.unwrap_or(cfg.matches);
    if total == 0 {
        return Err(CliError::InvalidInput("matches must be >= 1".to_string()));
    }
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut logger = match &output {
        Some(path) => Some(MatchLogger::create(path)?),
        None => None,
    };

    let mut summary = SimSummary::default();
    for i in 0..total {
        let match_seed = base_seed.wrapping_add(u64::from(i));
        let mut engine = Engine::new(match_seed);
        let result = match logger.as_mut() {
            Some(logger) => {
                let mut events: Vec<MatchEvent> = Vec::new();
                let result = engine.run(&mut events)?;
                let id = logger.next_id();
                if let Some(record) = MatchRecord::from_events(id, Some(match_seed), events) {
                    logger.write(&record)?;
                }
                result
            }
            None => engine.run(&mut NullSink)?,
        };
        debug!(
            seed = match_seed,
            turns = result.turns,
            outcome = ?result.outcome,
            "match finished"
        );
        summary.record(&result);
    }

    writeln!(out, "Base seed: {}", base_seed)?;
    writeln!(out, "Simulated: {} matches", summary.matches)?;
    for (seat, wins) in summary.wins.iter().enumerate() {
        writeln!(out, "Player {} wins: {}", seat + 1, wins)?;
    }
    writeln!(out, "Ties: {}", summary.ties)?;
    writeln!(out, "Average turns: {:.1}", summary.average_turns())?;
    if summary.turn_limited > 0 {
        ui::display_warning(
            err,
            &format!("{} match(es) stopped at the turn limit", summary.turn_limited),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodeck_engine::game::PlayerScore;
    use autodeck_engine::player::PlayerId;

    fn result(outcome: Outcome, turns: u32, reason: EndReason) -> MatchResult {
        MatchResult {
            scores: vec![
                PlayerScore {
                    player: PlayerId(0),
                    points: 0,
                },
                PlayerScore {
                    player: PlayerId(1),
                    points: 0,
                },
            ],
            outcome,
            reason,
            turns,
        }
    }

    #[test]
    fn summary_tallies_outcomes() {
        let mut s = SimSummary::default();
        s.record(&result(Outcome::Winner(PlayerId(1)), 80, EndReason::FrameworksExhausted));
        s.record(&result(Outcome::Tie, 90, EndReason::FrameworksExhausted));
        s.record(&result(Outcome::Winner(PlayerId(1)), 100, EndReason::TurnLimit));
        assert_eq!(s.matches, 3);
        assert_eq!(s.wins, [0, 2]);
        assert_eq!(s.ties, 1);
        assert_eq!(s.turn_limited, 1);
        assert!((s.average_turns() - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_summary_averages_zero() {
        assert_eq!(SimSummary::default().average_turns(), 0.0);
    }
}
