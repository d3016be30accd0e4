use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// One of the four disjoint locations a card can occupy within a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Face-down pile; the front is the next card drawn
    DrawPile,
    /// Cards available to the player this turn
    Hand,
    /// Cards waiting to be reshuffled into the draw pile
    DiscardPile,
    /// Cards played for buying power during the current buy phase
    Played,
}

/// A player's cards split across the four zones.
/// Owns every zone transition, including the on-demand reshuffle of the discard pile.
///
/// Randomness is never stored here; operations that may shuffle borrow the
/// match generator so a single seed drives the whole match.
///
/// # Examples
///
/// ```
/// use autodeck_engine::cards::{Card, CardId, CardKind};
/// use autodeck_engine::deck::Deck;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let mut deck = Deck::new();
/// for i in 0..3 {
///     deck.receive_purchased(Card::new(CardId(i), CardKind::Bitcoin));
/// }
/// // Empty draw pile: the discard pile is reshuffled before drawing
/// let drawn = deck.draw_one(&mut rng).expect("discard had cards");
/// assert_eq!(deck.hand(), &[drawn]);
/// assert_eq!(deck.draw_pile().len(), 2);
/// assert!(deck.discard_pile().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Deck {
    draw_pile: Vec<Card>,
    hand: Vec<Card>,
    discard_pile: Vec<Card>,
    played: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }
    pub fn played(&self) -> &[Card] {
        &self.played
    }

    pub fn zone(&self, zone: Zone) -> &[Card] {
        match zone {
            Zone::DrawPile => &self.draw_pile,
            Zone::Hand => &self.hand,
            Zone::DiscardPile => &self.discard_pile,
            Zone::Played => &self.played,
        }
    }

    /// Every owned card, zone by zone.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile
            .iter()
            .chain(self.hand.iter())
            .chain(self.discard_pile.iter())
            .chain(self.played.iter())
    }

    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.hand.len() + self.discard_pile.len() + self.played.len()
    }

    /// Put a card at the back of the draw pile. Used only while building a starting deck.
    pub fn add_to_draw_pile(&mut self, card: Card) {
        self.draw_pile.push(card);
    }

    pub fn shuffle_draw_pile<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.draw_pile.shuffle(rng);
    }

    /// Move the front of the draw pile into the hand, reshuffling the discard pile first
    /// when the draw pile is empty. Returns `None` when both piles are exhausted.
    pub fn draw_one<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.draw_pile.is_empty() {
            self.reshuffle_discard_into_draw(rng);
        }
        if self.draw_pile.is_empty() {
            return None;
        }
        let card = self.draw_pile.remove(0);
        self.hand.push(card);
        Some(card)
    }

    /// Shuffle the discard pile and append it to the draw pile. No-op when discard is empty.
    pub fn reshuffle_discard_into_draw<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.discard_pile.is_empty() {
            return;
        }
        self.discard_pile.shuffle(rng);
        self.draw_pile.append(&mut self.discard_pile);
    }

    /// Draw until the hand holds `target` cards or nothing is left to draw.
    /// Returns the resulting hand size, which may be short.
    pub fn deal_hand<R: Rng + ?Sized>(&mut self, target: usize, rng: &mut R) -> usize {
        while self.hand.len() < target {
            if self.draw_one(rng).is_none() {
                break;
            }
        }
        self.hand.len()
    }

    /// Move `card` from hand to played-cards. `false` if it is not in hand.
    pub fn play_from_hand_to_played(&mut self, card: CardId) -> bool {
        match self.take_from_hand(card) {
            Some(c) => {
                self.played.push(c);
                true
            }
            None => false,
        }
    }

    /// Move `card` from hand straight to the discard pile. `false` if it is not in hand.
    pub fn play_from_hand_to_discard(&mut self, card: CardId) -> bool {
        match self.take_from_hand(card) {
            Some(c) => {
                self.discard_pile.push(c);
                true
            }
            None => false,
        }
    }

    /// Bought cards go to the discard pile, never to the hand.
    pub fn receive_purchased(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Discard hand and played-cards, then redeal up to `target` cards.
    /// Returns the number of cards discarded from the hand.
    pub fn cleanup<R: Rng + ?Sized>(&mut self, target: usize, rng: &mut R) -> usize {
        let discarded = self.hand.len();
        self.discard_pile.append(&mut self.hand);
        self.discard_pile.append(&mut self.played);
        self.deal_hand(target, rng);
        discarded
    }

    /// Buying power of the current buy phase.
    pub fn total_played_value(&self) -> u32 {
        self.played.iter().map(|c| c.value).sum()
    }

    fn take_from_hand(&mut self, card: CardId) -> Option<Card> {
        let idx = self.hand.iter().position(|c| c.id == card)?;
        Some(self.hand.remove(idx))
    }
}
