use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, error, info};

use crate::cards::CardKind;
use crate::errors::GameError;
use crate::events::{EventSink, MatchEvent};
use crate::game::{
    decide_outcome, EndReason, MatchResult, Phase, PlayerScore, TurnState, PLAYER_COUNT,
};
use crate::player::{Player, PlayerId, HAND_SIZE, STARTING_BITCOINS, STARTING_METHODS};
use crate::strategy::plan_purchase;
use crate::supply::CardSupply;

/// Hard cap on completed turns; reaching it ends the match with [`EndReason::TurnLimit`].
pub const MAX_TURNS: u32 = 10_000;

/// Match engine driving a two-player automated game from setup to final score.
/// Owns the shared supply, both players, the turn state, and the single RNG every
/// random decision is drawn from.
///
/// # Examples
///
/// ```
/// use autodeck_engine::engine::Engine;
/// use autodeck_engine::events::MatchEvent;
///
/// let mut engine = Engine::new(12345);
/// let mut events: Vec<MatchEvent> = Vec::new();
///
/// match engine.run(&mut events) {
///     Ok(result) => {
///         assert!(engine.is_over());
///         assert_eq!(result.scores.len(), 2);
///         assert!(matches!(events.last(), Some(MatchEvent::MatchEnded { .. })));
///     }
///     Err(e) => panic!("invariant violated: {}", e),
/// }
/// ```
#[derive(Debug)]
pub struct Engine {
    /// Shared pool of purchasable cards
    supply: CardSupply,
    /// Exactly two seats
    players: [Player; PLAYER_COUNT],
    /// Active seat, phase, and completed-turn counter
    state: TurnState,
    /// Source of every shuffle and random choice in the match
    rng: ChaCha20Rng,
    /// Seed the RNG was built from, when known
    seed: Option<u64>,
    /// Cards across supply and all zones; constant for the whole match
    total_cards: usize,
    started: bool,
    result: Option<MatchResult>,
}

impl Engine {
    /// Standard match driven by a ChaCha20 generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self::with_supply(
            CardSupply::standard(),
            ChaCha20Rng::seed_from_u64(seed),
        );
        engine.seed = Some(seed);
        engine
    }

    /// Match over a caller-provided supply and generator.
    ///
    /// Each player takes 7 Bitcoins and 3 Methods from `supply` (fewer if the supply
    /// runs short), shuffles, and draws an opening hand; then the starting seat is
    /// chosen uniformly at random.
    pub fn with_supply(mut supply: CardSupply, mut rng: ChaCha20Rng) -> Self {
        let total_cards = supply.total_remaining();
        let mut players = [
            Player::new(PlayerId(0), "Player 1"),
            Player::new(PlayerId(1), "Player 2"),
        ];

        for p in &mut players {
            let starter = std::iter::repeat(CardKind::Bitcoin)
                .take(STARTING_BITCOINS)
                .chain(std::iter::repeat(CardKind::Method).take(STARTING_METHODS));
            for kind in starter {
                if let Some(card) = supply.take(kind) {
                    p.deck_mut().add_to_draw_pile(card);
                }
            }
        }
        for p in &mut players {
            let dealt = p.prepare_opening_hand(&mut rng);
            debug!(player = %p.id(), hand = dealt, "opening hand dealt");
        }

        let starting = rng.random_range(0..PLAYER_COUNT);
        Self {
            supply,
            players,
            state: TurnState::new(starting),
            rng,
            seed: None,
            total_cards,
            started: false,
            result: None,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn supply(&self) -> &CardSupply {
        &self.supply
    }
    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }
    /// Raw access to both seats. Bypasses every zone rule; meant for tests that
    /// need to corrupt state and watch [`Engine::verify_invariants`] catch it.
    #[doc(hidden)]
    pub fn players_mut(&mut self) -> &mut [Player; PLAYER_COUNT] {
        &mut self.players
    }
    pub fn active_player(&self) -> PlayerId {
        self.state.active()
    }
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }
    /// Completed turns so far.
    pub fn turn(&self) -> u32 {
        self.state.turn()
    }
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Announce the starting player. Idempotent; [`Engine::play_turn`] calls it on first use.
    pub fn start(&mut self, sink: &mut dyn EventSink) {
        if self.started {
            return;
        }
        self.started = true;
        let starting_player = self.state.active();
        info!(%starting_player, seed = ?self.seed, "match started");
        sink.emit(MatchEvent::MatchStarted { starting_player });
    }

    /// Run turns until the match ends and return the final result.
    pub fn run(&mut self, sink: &mut dyn EventSink) -> Result<MatchResult, GameError> {
        self.start(sink);
        loop {
            if let Some(result) = &self.result {
                return Ok(result.clone());
            }
            self.play_turn(sink)?;
        }
    }

    /// Play one full turn (buy then cleanup) for the active player, advance the seat,
    /// and run the end-of-match check.
    ///
    /// # Errors
    ///
    /// - [`GameError::MatchOver`] if the match already ended
    /// - any invariant variant if a phase left the zones inconsistent; the match
    ///   must be abandoned in that case
    pub fn play_turn(&mut self, sink: &mut dyn EventSink) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::MatchOver);
        }
        self.start(sink);

        self.buy_phase(sink)?;
        self.cleanup_phase(sink)?;

        let turn = self.state.advance();
        sink.emit(MatchEvent::TurnEnded {
            turn,
            remaining: self.supply.counts(),
        });

        if let Some(reason) = self.end_reason() {
            self.finish(reason, sink);
        }
        Ok(())
    }

    fn buy_phase(&mut self, sink: &mut dyn EventSink) -> Result<(), GameError> {
        let player = self.state.active();
        let idx = player.0;

        let plan = plan_purchase(self.players[idx].hand(), &self.supply, &mut self.rng);
        let mut played = Vec::with_capacity(plan.to_play.len());
        for &id in &plan.to_play {
            let kind = self.players[idx]
                .hand()
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.kind);
            if let (Some(kind), true) = (kind, self.players[idx].play_for_buying(id)) {
                played.push(kind);
            }
        }
        let buying_power = self.players[idx].deck().total_played_value();
        if !played.is_empty() {
            sink.emit(MatchEvent::CardsPlayed {
                player,
                cards: played,
                buying_power,
            });
        }

        let bought = plan
            .target
            .filter(|&kind| self.supply.affordable(kind, buying_power))
            .and_then(|kind| self.supply.take(kind));
        match bought {
            Some(card) => {
                debug!(%player, kind = %card.kind, buying_power, "purchase made");
                self.players[idx].deck_mut().receive_purchased(card);
                sink.emit(MatchEvent::PurchaseMade {
                    player,
                    kind: card.kind,
                });
            }
            None => {
                debug!(%player, buying_power, "no affordable card");
                sink.emit(MatchEvent::PurchaseSkipped { player });
            }
        }

        self.verify_invariants()?;
        self.state.finish_buy();
        sink.emit(MatchEvent::PhaseCompleted {
            player,
            phase: Phase::Buy,
        });
        Ok(())
    }

    fn cleanup_phase(&mut self, sink: &mut dyn EventSink) -> Result<(), GameError> {
        let player = self.state.active();
        let idx = player.0;

        let deck = self.players[idx].deck_mut();
        let discarded = deck.cleanup(HAND_SIZE, &mut self.rng);
        let size = deck.hand().len();
        if !deck.played().is_empty() {
            error!(%player, "played cards survived cleanup");
            return Err(GameError::PlayedCardsNotEmpty { player });
        }
        debug!(%player, discarded, size, "cleanup complete");
        sink.emit(MatchEvent::HandDealt {
            player,
            discarded,
            size,
        });

        self.verify_invariants()?;
        sink.emit(MatchEvent::PhaseCompleted {
            player,
            phase: Phase::Cleanup,
        });
        Ok(())
    }

    fn end_reason(&self) -> Option<EndReason> {
        if self.supply.is_empty(CardKind::Framework) {
            Some(EndReason::FrameworksExhausted)
        } else if self.state.turn() >= MAX_TURNS {
            Some(EndReason::TurnLimit)
        } else {
            None
        }
    }

    /// Current AP tally per player.
    pub fn scores(&self) -> Vec<PlayerScore> {
        self.players
            .iter()
            .map(|p| PlayerScore {
                player: p.id(),
                points: p.score(),
            })
            .collect()
    }

    fn finish(&mut self, reason: EndReason, sink: &mut dyn EventSink) {
        let scores = self.scores();
        let outcome = decide_outcome(&scores);
        info!(?outcome, ?reason, turns = self.state.turn(), "match ended");
        sink.emit(MatchEvent::MatchEnded {
            scores: scores.clone(),
            outcome,
            reason,
        });
        self.result = Some(MatchResult {
            scores,
            outcome,
            reason,
            turns: self.state.turn(),
        });
    }

    /// Check that every card is in exactly one place (supply or one player zone) and
    /// that the overall count has not changed since setup.
    pub fn verify_invariants(&self) -> Result<(), GameError> {
        let mut seen = HashSet::with_capacity(self.total_cards);
        let owned = self.players.iter().flat_map(|p| p.deck().all_cards());
        for card in self.supply.cards().chain(owned) {
            if !seen.insert(card.id) {
                error!(card = %card.id, "card found in two places");
                return Err(GameError::DuplicateCard { card: card.id });
            }
        }
        if seen.len() != self.total_cards {
            error!(expected = self.total_cards, actual = seen.len(), "card count changed");
            return Err(GameError::CardConservation {
                expected: self.total_cards,
                actual: seen.len(),
            });
        }
        Ok(())
    }
}
