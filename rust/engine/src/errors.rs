use thiserror::Error;

use crate::cards::CardId;
use crate::player::PlayerId;

/// Fatal engine failures. Every variant except [`GameError::MatchOver`] means a
/// zone transition broke card conservation and the match must not continue.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Card conservation broken: expected {expected} cards, found {actual}")]
    CardConservation { expected: usize, actual: usize },
    #[error("Card {card} is present in more than one zone")]
    DuplicateCard { card: CardId },
    #[error("{player} still has played cards after cleanup")]
    PlayedCardsNotEmpty { player: PlayerId },
    #[error("Match is already over")]
    MatchOver,
}
