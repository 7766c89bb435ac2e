use serde::{Deserialize, Serialize};

use crate::deck::Deck;

/// Opaque player identity, supplied by the hosting environment's
/// authentication layer with every call. The engine never verifies
/// identities itself; it only compares them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Well-known empty sentinel used at the query boundary for unset
    /// slots. The hosting environment never supplies it as a caller.
    pub const NIL: PlayerId = PlayerId(0);

    pub fn is_nil(self) -> bool {
        self == Self::NIL
    }
}

/// Starting health pool for both players
pub const STARTING_HP: u32 = 30;

/// A filled player slot: identity, health pool, and dealt deck.
/// Empty slots are `Option<Seat>` on the match aggregate, so occupancy
/// checks stay exhaustive under pattern matching.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    player: PlayerId,
    hp: u32,
    deck: Deck,
}

impl Seat {
    pub fn new(player: PlayerId, deck: Deck) -> Self {
        Self {
            player,
            hp: STARTING_HP,
            deck,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub(crate) fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Apply incoming damage, clamping at zero. Returns the new hp.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }
}
