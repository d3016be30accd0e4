//! Console rendering of match events.
//!
//! The engine reports what happened; this module decides how it reads on a
//! terminal. [`render_text`] walks a whole event stream because turn headers
//! depend on where one turn ends and the next begins.
//!
//! ```rust
//! use autodeck_engine::engine::Engine;
//! use autodeck_engine::events::MatchEvent;
//! use autodeck_cli::formatters::render_text;
//!
//! let mut events: Vec<MatchEvent> = Vec::new();
//! Engine::new(42).run(&mut events).unwrap();
//! let lines = render_text(&events);
//! assert_eq!(lines[0], "=== Automation Card Game ===");
//! assert!(lines.iter().any(|l| l.contains("GAME OVER")));
//! ```

use autodeck_engine::cards::CardKind;
use autodeck_engine::events::MatchEvent;
use autodeck_engine::game::{EndReason, Outcome, Phase, PlayerScore};
use autodeck_engine::player::PlayerId;

pub fn format_cards(cards: &[CardKind]) -> String {
    let names: Vec<&str> = cards.iter().map(|k| k.name()).collect();
    format!("[{}]", names.join(", "))
}

fn points_of(scores: &[PlayerScore], player: PlayerId) -> u32 {
    scores
        .iter()
        .find(|s| s.player == player)
        .map_or(0, |s| s.points)
}

/// Lines for a single event, without turn headers.
pub fn format_event(event: &MatchEvent) -> Vec<String> {
    match event {
        MatchEvent::MatchStarted { starting_player } => vec![
            "=== Automation Card Game ===".to_string(),
            format!("{} goes first!", starting_player),
        ],
        MatchEvent::CardsPlayed {
            cards,
            buying_power,
            ..
        } => vec![
            format!("Played Cards: {}", format_cards(cards)),
            format!("Buying power: {} cryptocoins", buying_power),
        ],
        MatchEvent::PurchaseMade { kind, .. } => vec![format!("Purchased: {}", kind)],
        MatchEvent::PurchaseSkipped { .. } => {
            vec!["No affordable cards to purchase.".to_string()]
        }
        MatchEvent::PhaseCompleted {
            player,
            phase: Phase::Buy,
        } => vec![format!("--- {} Cleanup Phase ---", player)],
        MatchEvent::PhaseCompleted {
            phase: Phase::Cleanup,
            ..
        } => Vec::new(),
        MatchEvent::HandDealt {
            discarded, size, ..
        } => vec![
            format!("Discarded {} cards from hand", discarded),
            format!("Dealt new hand of {} cards", size),
        ],
        MatchEvent::TurnEnded { remaining, .. } => {
            let mut lines = vec![
                "========== TURN COMPLETE ==========".to_string(),
                "Card Supply Remaining:".to_string(),
            ];
            lines.extend(
                remaining
                    .iter()
                    .map(|(kind, count)| format!("  {}: {}", kind, count)),
            );
            lines
        }
        MatchEvent::MatchEnded {
            scores,
            outcome,
            reason,
        } => {
            let mut lines = vec![String::new(), "========== GAME OVER ==========".to_string()];
            if *reason == EndReason::TurnLimit {
                lines.push("Turn limit reached before the Frameworks sold out.".to_string());
            }
            for s in scores {
                lines.push(format!("{} Final Score: {} APs", s.player, s.points));
            }
            lines.push(match outcome {
                Outcome::Winner(p) => {
                    format!("*** {} WINS with {} APs! ***", p, points_of(scores, *p))
                }
                Outcome::Tie => {
                    let pts = scores.first().map_or(0, |s| s.points);
                    format!("*** TIE at {} APs! ***", pts)
                }
            });
            lines
        }
    }
}

fn acting_player(event: &MatchEvent) -> Option<PlayerId> {
    match event {
        MatchEvent::CardsPlayed { player, .. }
        | MatchEvent::PurchaseMade { player, .. }
        | MatchEvent::PurchaseSkipped { player }
        | MatchEvent::HandDealt { player, .. }
        | MatchEvent::PhaseCompleted { player, .. } => Some(*player),
        _ => None,
    }
}

/// Render a full event stream, inserting a header before each turn's first event.
pub fn render_text(events: &[MatchEvent]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut turn = 1u32;
    let mut turn_open = false;
    for event in events {
        if !turn_open {
            if let Some(player) = acting_player(event) {
                lines.push(String::new());
                lines.push(format!("========== TURN {} ==========", turn));
                lines.push(format!("--- {} Buy Phase ---", player));
                turn_open = true;
            }
        }
        if let MatchEvent::TurnEnded { turn: done, .. } = event {
            turn = done + 1;
            turn_open = false;
        }
        lines.extend(format_event(event));
    }
    lines
}
