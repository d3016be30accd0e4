use std::collections::{BTreeMap, VecDeque};

use crate::cards::{Card, CardId, CardKind, CATALOG};

/// Shared pool of purchasable card instances, one stack per kind.
/// Stacks only shrink: a card that leaves the supply never comes back.
///
/// # Examples
///
/// ```
/// use autodeck_engine::cards::CardKind;
/// use autodeck_engine::supply::CardSupply;
///
/// let mut supply = CardSupply::standard();
/// assert_eq!(supply.remaining(CardKind::Framework), 8);
/// let card = supply.take(CardKind::Framework).expect("framework available");
/// assert_eq!(card.cost, 8);
/// assert_eq!(supply.remaining(CardKind::Framework), 7);
/// ```
#[derive(Debug, Clone)]
pub struct CardSupply {
    stacks: BTreeMap<CardKind, VecDeque<Card>>,
}

impl CardSupply {
    /// Supply with the catalog quantities (160 cards).
    pub fn standard() -> Self {
        let quantities: Vec<(CardKind, usize)> =
            CATALOG.iter().map(|s| (s.kind, s.quantity)).collect();
        Self::with_quantities(&quantities)
    }

    /// Supply with custom stack sizes. Costs and values always come from the catalog;
    /// kinds not listed start empty. Card ids are assigned in listing order starting at 1.
    pub fn with_quantities(quantities: &[(CardKind, usize)]) -> Self {
        let mut stacks: BTreeMap<CardKind, VecDeque<Card>> = BTreeMap::new();
        let mut next_id = 1u32;
        for &(kind, qty) in quantities {
            let stack = stacks.entry(kind).or_default();
            for _ in 0..qty {
                stack.push_back(Card::new(CardId(next_id), kind));
                next_id += 1;
            }
        }
        Self { stacks }
    }

    /// Remove and return the front card of `kind`, or `None` when that stack is empty.
    pub fn take(&mut self, kind: CardKind) -> Option<Card> {
        self.stacks.get_mut(&kind).and_then(|s| s.pop_front())
    }

    pub fn peek_cost(&self, kind: CardKind) -> Option<u32> {
        self.stacks
            .get(&kind)
            .and_then(|s| s.front())
            .map(|c| c.cost)
    }

    pub fn is_empty(&self, kind: CardKind) -> bool {
        self.remaining(kind) == 0
    }

    pub fn remaining(&self, kind: CardKind) -> usize {
        self.stacks.get(&kind).map_or(0, |s| s.len())
    }

    pub fn total_remaining(&self) -> usize {
        self.stacks.values().map(|s| s.len()).sum()
    }

    /// `true` when a card of `kind` is in stock and costs at most `budget`.
    pub fn affordable(&self, kind: CardKind, budget: u32) -> bool {
        self.peek_cost(kind).is_some_and(|cost| cost <= budget)
    }

    /// Every card still in the supply, stack by stack.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.stacks.values().flat_map(|s| s.iter())
    }

    /// Remaining count per kind, in kind order.
    pub fn counts(&self) -> Vec<(CardKind, usize)> {
        crate::cards::all_kinds()
            .iter()
            .map(|&k| (k, self.remaining(k)))
            .collect()
    }
}

impl Default for CardSupply {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_supply_has_catalog_quantities() {
        let s = CardSupply::standard();
        assert_eq!(s.remaining(CardKind::Method), 14);
        assert_eq!(s.remaining(CardKind::Module), 8);
        assert_eq!(s.remaining(CardKind::Framework), 8);
        assert_eq!(s.remaining(CardKind::Bitcoin), 60);
        assert_eq!(s.remaining(CardKind::Ethereum), 40);
        assert_eq!(s.remaining(CardKind::Dogecoin), 30);
        assert_eq!(s.total_remaining(), 160);
    }

    #[test]
    fn card_ids_are_unique() {
        let s = CardSupply::standard();
        let ids: HashSet<CardId> = s.cards().map(|c| c.id).collect();
        assert_eq!(ids.len(), 160);
    }

    #[test]
    fn take_drains_stack_then_reports_unavailable() {
        let mut s = CardSupply::with_quantities(&[(CardKind::Module, 2)]);
        assert_eq!(s.peek_cost(CardKind::Module), Some(5));
        let a = s.take(CardKind::Module).unwrap();
        let b = s.take(CardKind::Module).unwrap();
        assert_ne!(a.id, b.id);
        assert!(s.take(CardKind::Module).is_none());
        assert!(s.is_empty(CardKind::Module));
        assert_eq!(s.peek_cost(CardKind::Module), None);
    }

    #[test]
    fn unlisted_kind_is_empty() {
        let s = CardSupply::with_quantities(&[(CardKind::Bitcoin, 1)]);
        assert!(s.is_empty(CardKind::Framework));
        assert!(!s.affordable(CardKind::Framework, 100));
        assert!(s.affordable(CardKind::Bitcoin, 0));
    }
}
