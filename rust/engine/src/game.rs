use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Number of seats in a match
pub const PLAYER_COUNT: usize = 2;

/// Phase of the active player's turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Play cryptocurrency, buy at most one card
    Buy,
    /// Discard hand and played-cards, redeal
    Cleanup,
}

/// Why the match stopped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum EndReason {
    /// The Framework stack in the supply is empty
    FrameworksExhausted,
    /// The hard turn cap was reached first
    TurnLimit,
}

/// Winner of a finished match, or a tie on equal scores.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(PlayerId),
    Tie,
}

/// Final AP tally of one player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player: PlayerId,
    pub points: u32,
}

/// Summary of a finished match.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub scores: Vec<PlayerScore>,
    pub outcome: Outcome,
    pub reason: EndReason,
    /// Completed turns (one turn = one player's buy + cleanup)
    pub turns: u32,
}

/// Strictly higher score wins; equal scores tie. No tie-break.
pub fn decide_outcome(scores: &[PlayerScore]) -> Outcome {
    let Some(best) = scores.iter().map(|s| s.points).max() else {
        return Outcome::Tie;
    };
    let mut leaders = scores.iter().filter(|s| s.points == best);
    match (leaders.next(), leaders.next()) {
        (Some(only), None) => Outcome::Winner(only.player),
        _ => Outcome::Tie,
    }
}

/// Tracks whose turn it is and the phase within that turn.
/// Play moves Buy -> Cleanup, then [`TurnState::advance`] passes to the next seat.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TurnState {
    /// Index of the active seat
    active: usize,
    /// Current phase of the active seat
    phase: Phase,
    /// Completed turns so far
    turn: u32,
}

impl TurnState {
    pub fn new(starting: usize) -> Self {
        Self {
            active: starting % PLAYER_COUNT,
            phase: Phase::Buy,
            turn: 0,
        }
    }

    pub fn active(&self) -> PlayerId {
        PlayerId(self.active)
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn finish_buy(&mut self) {
        self.phase = Phase::Cleanup;
    }

    /// Close the current turn and hand over to the next seat. Returns the completed turn number.
    pub fn advance(&mut self) -> u32 {
        self.turn += 1;
        self.active = (self.active + 1) % PLAYER_COUNT;
        self.phase = Phase::Buy;
        self.turn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(p: usize, points: u32) -> PlayerScore {
        PlayerScore {
            player: PlayerId(p),
            points,
        }
    }

    #[test]
    fn turn_state_alternates_seats() {
        let mut ts = TurnState::new(1);
        assert_eq!(ts.active(), PlayerId(1));
        assert_eq!(ts.phase(), Phase::Buy);
        ts.finish_buy();
        assert_eq!(ts.phase(), Phase::Cleanup);
        assert_eq!(ts.advance(), 1);
        assert_eq!(ts.active(), PlayerId(0));
        assert_eq!(ts.phase(), Phase::Buy);
        ts.finish_buy();
        ts.advance();
        assert_eq!(ts.active(), PlayerId(1));
        assert_eq!(ts.turn(), 2);
    }

    #[test]
    fn higher_score_wins_and_equal_ties() {
        assert_eq!(
            decide_outcome(&[score(0, 12), score(1, 9)]),
            Outcome::Winner(PlayerId(0))
        );
        assert_eq!(
            decide_outcome(&[score(0, 3), score(1, 9)]),
            Outcome::Winner(PlayerId(1))
        );
        assert_eq!(decide_outcome(&[score(0, 7), score(1, 7)]), Outcome::Tie);
        assert_eq!(decide_outcome(&[]), Outcome::Tie);
    }
}
