use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::catalog_ids;

/// Deck assignment policy, fixed at match creation.
///
/// Both variants deal the same card composition to both seats; only the
/// order differs. `Shuffled` is an explicitly opt-in extension — the default
/// deal draws no randomness at all, so outcomes stay auditable from the
/// call sequence alone.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum DealPolicy {
    /// Both seats receive the catalog id sequence in catalog order.
    #[default]
    Mirrored,
    /// Each seat receives a seeded ChaCha20 permutation of the same ids.
    Shuffled { seed: u64 },
}

/// A player's dealt deck: the immutable dealt sequence plus a played mask.
///
/// The dealt order is preserved for the whole match so hand history can be
/// reconstructed; play validation only consults the unplayed subset.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    dealt: Vec<u32>,
    played: Vec<bool>,
}

impl Deck {
    pub fn new(dealt: Vec<u32>) -> Self {
        let played = vec![false; dealt.len()];
        Self { dealt, played }
    }

    /// Deal both seats' decks under the given policy.
    pub fn deal_pair(policy: DealPolicy) -> (Deck, Deck) {
        match policy {
            DealPolicy::Mirrored => (Deck::new(catalog_ids()), Deck::new(catalog_ids())),
            DealPolicy::Shuffled { seed } => {
                let mut rng = ChaCha20Rng::seed_from_u64(seed);
                let mut first = catalog_ids();
                first.shuffle(&mut rng);
                let mut second = catalog_ids();
                second.shuffle(&mut rng);
                (Deck::new(first), Deck::new(second))
            }
        }
    }

    /// Full dealt history in order, played cards included.
    pub fn dealt(&self) -> &[u32] {
        &self.dealt
    }

    /// Card id at `index` if it is in bounds and not yet played.
    pub fn card_id_at(&self, index: usize) -> Option<u32> {
        if index < self.dealt.len() && !self.played[index] {
            Some(self.dealt[index])
        } else {
            None
        }
    }

    pub fn is_played(&self, index: usize) -> bool {
        self.played.get(index).copied().unwrap_or(false)
    }

    pub fn mark_played(&mut self, index: usize) {
        if let Some(slot) = self.played.get_mut(index) {
            *slot = true;
        }
    }

    pub fn remaining(&self) -> usize {
        self.played.iter().filter(|p| !**p).count()
    }

    pub fn len(&self) -> usize {
        self.dealt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dealt.is_empty()
    }
}
