use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{automation_points, Card, CardId};
use crate::deck::Deck;

/// Number of Bitcoins in every starting deck
pub const STARTING_BITCOINS: usize = 7;
/// Number of Methods in every starting deck
pub const STARTING_METHODS: usize = 3;
/// Hand size dealt at setup and after every cleanup
pub const HAND_SIZE: usize = 5;

/// Seat index of a player (0 or 1).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A seat in the match: identity, an AP counter, and the player's [`Deck`].
#[derive(Debug, Clone)]
pub struct Player {
    /// Seat index
    id: PlayerId,
    /// Display name ("Player 1", "Player 2")
    name: String,
    /// Free-standing AP counter; final scoring recounts from owned cards instead
    ap: u32,
    /// The four card zones
    deck: Deck,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ap: 0,
            deck: Deck::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn ap(&self) -> u32 {
        self.ap
    }
    pub fn add_ap(&mut self, amount: u32) {
        self.ap = self.ap.saturating_add(amount);
    }
    pub fn remove_ap(&mut self, amount: u32) {
        self.ap = self.ap.saturating_sub(amount);
    }

    pub fn hand(&self) -> &[Card] {
        self.deck.hand()
    }

    /// Shuffle the starting draw pile and deal the opening hand.
    pub fn prepare_opening_hand<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        self.deck.shuffle_draw_pile(rng);
        self.deck.deal_hand(HAND_SIZE, rng)
    }

    pub fn play_for_buying(&mut self, card: CardId) -> bool {
        self.deck.play_from_hand_to_played(card)
    }

    /// Final score: APs of every Automation card across hand, draw pile, discard pile,
    /// and played-cards (the last is empty once cleanup has run).
    pub fn score(&self) -> u32 {
        automation_points(self.deck.all_cards())
    }
}
