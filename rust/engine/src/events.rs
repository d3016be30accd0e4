//! Observable state transitions of a match.
//!
//! The engine hands every [`MatchEvent`] to an [`EventSink`]; rendering them
//! as text or JSON is the sink owner's job.

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::game::{EndReason, Outcome, Phase, PlayerScore};
use crate::player::PlayerId;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchEvent {
    MatchStarted {
        starting_player: PlayerId,
    },
    CardsPlayed {
        player: PlayerId,
        cards: Vec<CardKind>,
        buying_power: u32,
    },
    PurchaseMade {
        player: PlayerId,
        kind: CardKind,
    },
    PurchaseSkipped {
        player: PlayerId,
    },
    HandDealt {
        player: PlayerId,
        discarded: usize,
        size: usize,
    },
    PhaseCompleted {
        player: PlayerId,
        phase: Phase,
    },
    TurnEnded {
        turn: u32,
        /// Cards left in each supply stack, in kind order
        remaining: Vec<(CardKind, usize)>,
    },
    MatchEnded {
        scores: Vec<PlayerScore>,
        outcome: Outcome,
        reason: EndReason,
    },
}

/// Receiver of match events.
pub trait EventSink {
    fn emit(&mut self, event: MatchEvent);
}

impl EventSink for Vec<MatchEvent> {
    fn emit(&mut self, event: MatchEvent) {
        self.push(event);
    }
}

/// Sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: MatchEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_tag() {
        let ev = MatchEvent::PurchaseMade {
            player: PlayerId(1),
            kind: CardKind::Framework,
        };
        let s = serde_json::to_string(&ev).unwrap();
        assert!(s.contains("\"event\":\"purchase_made\""));
        assert!(s.contains("\"Framework\""));
        let back: MatchEvent = serde_json::from_str(&s).unwrap();
        assert_eq!(back, ev);
    }

    #[test]
    fn turn_end_carries_supply_snapshot() {
        let ev = MatchEvent::TurnEnded {
            turn: 4,
            remaining: vec![(CardKind::Method, 7), (CardKind::Framework, 8)],
        };
        let v: serde_json::Value = serde_json::to_value(&ev).unwrap();
        assert_eq!(v["event"], "turn_ended");
        assert_eq!(v["remaining"][0][0], "Method");
        assert_eq!(v["remaining"][1][1], 8);
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<MatchEvent> = Vec::new();
        sink.emit(MatchEvent::MatchStarted {
            starting_player: PlayerId(0),
        });
        sink.emit(MatchEvent::PurchaseSkipped {
            player: PlayerId(0),
        });
        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink[1],
            MatchEvent::PurchaseSkipped {
                player: PlayerId(0)
            }
        );
        NullSink.emit(MatchEvent::PurchaseSkipped {
            player: PlayerId(1),
        });
    }
}
