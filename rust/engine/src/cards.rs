use serde::{Deserialize, Serialize};

/// A single battle card from the fixed catalog.
/// Cards are globally indexed by `id` and never created or destroyed at
/// runtime; `attack` is consumed by damage resolution, `health` is a static
/// stat carried for display and future extension.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Global catalog index
    pub id: u32,
    /// Damage dealt to the opponent's health pool when played
    pub attack: u32,
    /// Static stat; not consumed by any transition
    pub health: u32,
}

/// Number of cards in the catalog; also the dealt deck length per player.
pub const CATALOG_SIZE: usize = 8;

// Attacks sum to 39, so any 7 cards of a dealt deck carry at least 31
// damage and a live match cannot stall on deck exhaustion.
static CATALOG: [Card; CATALOG_SIZE] = [
    Card { id: 0, attack: 5, health: 6 },
    Card { id: 1, attack: 3, health: 4 },
    Card { id: 2, attack: 7, health: 5 },
    Card { id: 3, attack: 4, health: 8 },
    Card { id: 4, attack: 6, health: 3 },
    Card { id: 5, attack: 2, health: 9 },
    Card { id: 6, attack: 8, health: 2 },
    Card { id: 7, attack: 4, health: 4 },
];

/// The full card catalog, seeded at initialization time and immutable.
pub fn catalog() -> &'static [Card] {
    &CATALOG
}

/// Look up a catalog entry by global id.
pub fn card(id: u32) -> Option<&'static Card> {
    CATALOG.get(id as usize)
}

/// The card id sequence dealt to each player, in catalog order.
pub fn catalog_ids() -> Vec<u32> {
    CATALOG.iter().map(|c| c.id).collect()
}
