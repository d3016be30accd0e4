use serde::{Deserialize, Serialize};

/// Broad family a card kind belongs to.
/// Automation cards score APs at match end, Cryptocurrency cards are played for buying power.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Scores action points (APs); never played for buying power
    Automation,
    /// Played from hand to produce cryptocoins during the buy phase
    Cryptocurrency,
}

/// One of the six fixed card kinds in the catalog.
/// The kind alone determines category, cost, and value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum CardKind {
    /// Automation, cost 2, 1 AP
    Method,
    /// Automation, cost 5, 3 APs
    Module,
    /// Automation, cost 8, 6 APs
    Framework,
    /// Cryptocurrency, cost 0, 1 cryptocoin
    Bitcoin,
    /// Cryptocurrency, cost 3, 2 cryptocoins
    Ethereum,
    /// Cryptocurrency, cost 6, 3 cryptocoins
    Dogecoin,
}

/// Catalog row for a single kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CardSpec {
    pub kind: CardKind,
    pub category: Category,
    pub cost: u32,
    pub value: u32,
    /// Number of instances placed in the supply at match start
    pub quantity: usize,
}

/// The fixed card catalog.
pub const CATALOG: [CardSpec; 6] = [
    CardSpec {
        kind: CardKind::Method,
        category: Category::Automation,
        cost: 2,
        value: 1,
        quantity: 14,
    },
    CardSpec {
        kind: CardKind::Module,
        category: Category::Automation,
        cost: 5,
        value: 3,
        quantity: 8,
    },
    CardSpec {
        kind: CardKind::Framework,
        category: Category::Automation,
        cost: 8,
        value: 6,
        quantity: 8,
    },
    CardSpec {
        kind: CardKind::Bitcoin,
        category: Category::Cryptocurrency,
        cost: 0,
        value: 1,
        quantity: 60,
    },
    CardSpec {
        kind: CardKind::Ethereum,
        category: Category::Cryptocurrency,
        cost: 3,
        value: 2,
        quantity: 40,
    },
    CardSpec {
        kind: CardKind::Dogecoin,
        category: Category::Cryptocurrency,
        cost: 6,
        value: 3,
        quantity: 30,
    },
];

/// Total number of card instances in a standard supply (160).
pub const CATALOG_SIZE: usize = 14 + 8 + 8 + 60 + 40 + 30;

impl CardKind {
    pub fn spec(self) -> &'static CardSpec {
        match self {
            CardKind::Method => &CATALOG[0],
            CardKind::Module => &CATALOG[1],
            CardKind::Framework => &CATALOG[2],
            CardKind::Bitcoin => &CATALOG[3],
            CardKind::Ethereum => &CATALOG[4],
            CardKind::Dogecoin => &CATALOG[5],
        }
    }

    pub fn category(self) -> Category {
        self.spec().category
    }
    pub fn cost(self) -> u32 {
        self.spec().cost
    }
    pub fn value(self) -> u32 {
        self.spec().value
    }

    pub fn is_automation(self) -> bool {
        self.category() == Category::Automation
    }
    pub fn is_cryptocurrency(self) -> bool {
        self.category() == Category::Cryptocurrency
    }

    pub fn name(self) -> &'static str {
        match self {
            CardKind::Method => "Method",
            CardKind::Module => "Module",
            CardKind::Framework => "Framework",
            CardKind::Bitcoin => "Bitcoin",
            CardKind::Ethereum => "Ethereum",
            CardKind::Dogecoin => "Dogecoin",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn all_kinds() -> [CardKind; 6] {
    [
        CardKind::Method,
        CardKind::Module,
        CardKind::Framework,
        CardKind::Bitcoin,
        CardKind::Ethereum,
        CardKind::Dogecoin,
    ]
}

/// Automation kinds in purchase priority order (highest AP value first).
pub const AUTOMATION_PRIORITY: [CardKind; 3] =
    [CardKind::Framework, CardKind::Module, CardKind::Method];

/// Cryptocurrency kinds in purchase scan order (highest value first).
pub const CRYPTO_PRIORITY: [CardKind; 3] =
    [CardKind::Dogecoin, CardKind::Ethereum, CardKind::Bitcoin];

/// Unique identity of a card instance within one match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single card instance.
/// Two cards of the same kind are still distinct because they move between zones independently.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Instance identity, unique across the whole match
    pub id: CardId,
    /// Catalog kind
    pub kind: CardKind,
    /// Price in cryptocoins
    pub cost: u32,
    /// APs for Automation cards, cryptocoins for Cryptocurrency cards
    pub value: u32,
}

impl Card {
    pub fn new(id: CardId, kind: CardKind) -> Self {
        Self {
            id,
            kind,
            cost: kind.cost(),
            value: kind.value(),
        }
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }
    pub fn is_automation(&self) -> bool {
        self.kind.is_automation()
    }
    pub fn is_cryptocurrency(&self) -> bool {
        self.kind.is_cryptocurrency()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(cost={}, value={})", self.kind, self.cost, self.value)
    }
}

/// Sum of APs over the Automation cards in `cards`.
pub fn automation_points<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u32 {
    cards
        .into_iter()
        .filter(|c| c.is_automation())
        .map(|c| c.value)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_kind_lookup() {
        for spec in CATALOG.iter() {
            assert_eq!(spec.kind.spec(), spec);
        }
        let total: usize = CATALOG.iter().map(|s| s.quantity).sum();
        assert_eq!(total, CATALOG_SIZE);
        assert_eq!(CATALOG_SIZE, 160);
    }

    #[test]
    fn categories_split_three_and_three() {
        let automation = all_kinds().iter().filter(|k| k.is_automation()).count();
        let crypto = all_kinds().iter().filter(|k| k.is_cryptocurrency()).count();
        assert_eq!(automation, 3);
        assert_eq!(crypto, 3);
        assert!(AUTOMATION_PRIORITY.iter().all(|k| k.is_automation()));
        assert!(CRYPTO_PRIORITY.iter().all(|k| k.is_cryptocurrency()));
    }

    #[test]
    fn same_kind_cards_are_distinct_instances() {
        let a = Card::new(CardId(1), CardKind::Bitcoin);
        let b = Card::new(CardId(2), CardKind::Bitcoin);
        assert_eq!(a.kind, b.kind);
        assert_ne!(a, b);
    }

    #[test]
    fn automation_points_ignores_crypto() {
        let cards = [
            Card::new(CardId(1), CardKind::Framework),
            Card::new(CardId(2), CardKind::Dogecoin),
            Card::new(CardId(3), CardKind::Method),
        ];
        assert_eq!(automation_points(&cards), 7);
    }
}
