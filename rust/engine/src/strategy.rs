use rand::seq::IndexedRandom;
use rand::Rng;

use crate::cards::{Card, CardId, CardKind, AUTOMATION_PRIORITY, CRYPTO_PRIORITY};
use crate::supply::CardSupply;

/// Outcome of the purchasing decision for one buy phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchasePlan {
    /// Cards to move from hand to played-cards, in hand order
    pub to_play: Vec<CardId>,
    /// Cryptocoins produced by `to_play`
    pub buying_power: u32,
    /// Kind to take from the supply, or `None` to skip the purchase
    pub target: Option<CardKind>,
}

/// Decides what to play and what to buy for the active player.
///
/// Every Cryptocurrency card in `hand` is played. The resulting buying power
/// goes to the first Automation kind (Framework, Module, Method) that is in
/// stock and affordable; failing that, to a Cryptocurrency kind chosen by
/// [`choose_cryptocurrency`]. The supply is only inspected, never mutated.
///
/// # Examples
///
/// ```
/// use autodeck_engine::cards::{Card, CardId, CardKind};
/// use autodeck_engine::strategy::plan_purchase;
/// use autodeck_engine::supply::CardSupply;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let hand: Vec<Card> = (0..5).map(|i| Card::new(CardId(1000 + i), CardKind::Bitcoin)).collect();
/// let supply = CardSupply::standard();
/// let mut rng = ChaCha20Rng::seed_from_u64(1);
///
/// let plan = plan_purchase(&hand, &supply, &mut rng);
/// assert_eq!(plan.to_play.len(), 5);
/// assert_eq!(plan.buying_power, 5);
/// assert_eq!(plan.target, Some(CardKind::Module));
/// ```
pub fn plan_purchase<R: Rng + ?Sized>(
    hand: &[Card],
    supply: &CardSupply,
    rng: &mut R,
) -> PurchasePlan {
    let crypto: Vec<&Card> = hand.iter().filter(|c| c.is_cryptocurrency()).collect();
    let to_play = crypto.iter().map(|c| c.id).collect();
    let buying_power = crypto.iter().map(|c| c.value).sum();

    let target = choose_automation(buying_power, supply)
        .or_else(|| choose_cryptocurrency(buying_power, supply, rng));

    PurchasePlan {
        to_play,
        buying_power,
        target,
    }
}

/// Greedy Automation pick: the highest-AP kind in stock whose cost fits `buying_power`.
/// Never considers two cheaper cards instead of one.
pub fn choose_automation(buying_power: u32, supply: &CardSupply) -> Option<CardKind> {
    AUTOMATION_PRIORITY
        .iter()
        .copied()
        .find(|&kind| supply.affordable(kind, buying_power))
}

/// Fallback Cryptocurrency pick.
///
/// Affordable non-Bitcoin kinds are chosen uniformly at random; Bitcoin is bought
/// only when it is the sole affordable option. `None` when nothing qualifies.
pub fn choose_cryptocurrency<R: Rng + ?Sized>(
    buying_power: u32,
    supply: &CardSupply,
    rng: &mut R,
) -> Option<CardKind> {
    let affordable: Vec<CardKind> = CRYPTO_PRIORITY
        .iter()
        .copied()
        .filter(|&kind| supply.affordable(kind, buying_power))
        .collect();
    let preferred: Vec<CardKind> = affordable
        .iter()
        .copied()
        .filter(|&kind| kind != CardKind::Bitcoin)
        .collect();

    if !preferred.is_empty() {
        return preferred.choose(rng).copied();
    }
    affordable.first().copied()
}
