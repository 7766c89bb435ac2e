use std::collections::HashSet;

use clash_engine::cards::{catalog_ids, CATALOG_SIZE};
use clash_engine::deck::{DealPolicy, Deck};
use clash_engine::game::Match;
use clash_engine::player::PlayerId;

#[test]
fn mirrored_deal_gives_both_seats_the_catalog_order() {
    let (a, b) = Deck::deal_pair(DealPolicy::Mirrored);
    assert_eq!(a.dealt(), catalog_ids().as_slice());
    assert_eq!(a.dealt(), b.dealt());
    assert_eq!(a.len(), CATALOG_SIZE);
}

#[test]
fn shuffled_deal_is_deterministic_with_same_seed() {
    let (a1, b1) = Deck::deal_pair(DealPolicy::Shuffled { seed: 12345 });
    let (a2, b2) = Deck::deal_pair(DealPolicy::Shuffled { seed: 12345 });
    assert_eq!(a1.dealt(), a2.dealt(), "same seed must yield identical deal");
    assert_eq!(b1.dealt(), b2.dealt(), "same seed must yield identical deal");
}

#[test]
fn shuffled_deal_differs_with_different_seed() {
    let (a1, b1) = Deck::deal_pair(DealPolicy::Shuffled { seed: 1 });
    let (a2, b2) = Deck::deal_pair(DealPolicy::Shuffled { seed: 2 });
    assert_ne!(
        (a1.dealt(), b1.dealt()),
        (a2.dealt(), b2.dealt()),
        "different seeds should produce different deals (high probability)"
    );
}

#[test]
fn shuffled_deal_preserves_composition() {
    let (a, b) = Deck::deal_pair(DealPolicy::Shuffled { seed: 777 });
    let expected: HashSet<u32> = catalog_ids().into_iter().collect();
    let got_a: HashSet<u32> = a.dealt().iter().copied().collect();
    let got_b: HashSet<u32> = b.dealt().iter().copied().collect();
    assert_eq!(got_a, expected, "seat 1 must hold the full catalog");
    assert_eq!(got_b, expected, "seat 2 must hold the full catalog");
    assert_eq!(a.len(), CATALOG_SIZE);
    assert_eq!(b.len(), CATALOG_SIZE);
}

#[test]
fn played_mask_tracks_spent_indices() {
    let mut deck = Deck::new(vec![3, 1, 4]);
    assert_eq!(deck.card_id_at(1), Some(1));
    assert!(!deck.is_played(1));
    deck.mark_played(1);
    assert!(deck.is_played(1));
    assert_eq!(deck.card_id_at(1), None);
    // history keeps the spent card
    assert_eq!(deck.dealt(), &[3, 1, 4]);
    assert_eq!(deck.remaining(), 2);
}

#[test]
fn out_of_bounds_lookup_is_none() {
    let deck = Deck::new(vec![0, 1]);
    assert_eq!(deck.card_id_at(2), None);
    assert!(!deck.is_played(2));
}

#[test]
fn shuffled_match_still_plays_to_completion() {
    let mut game = Match::new(DealPolicy::Shuffled { seed: 99 });
    let alice = PlayerId(1);
    let bob = PlayerId(2);
    game.join(alice).unwrap();
    game.join(bob).unwrap();
    assert!(game.is_active());

    // alternate through the decks in index order until someone wins
    let mut idx = [0usize, 0usize];
    loop {
        let st = game.status();
        if !st.active {
            break;
        }
        let (who, i) = if st.current_turn == alice {
            let i = idx[0];
            idx[0] += 1;
            (alice, i)
        } else {
            let i = idx[1];
            idx[1] += 1;
            (bob, i)
        };
        game.play_card(who, i).expect("in-order play");
    }
    assert!(game.winner().is_some());
    assert_eq!(game.status().p1_hp.min(game.status().p2_hp), 0);
}
