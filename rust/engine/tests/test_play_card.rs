use clash_engine::errors::MatchError;
use clash_engine::game::Match;
use clash_engine::player::PlayerId;

const ALICE: PlayerId = PlayerId(0xA1);
const BOB: PlayerId = PlayerId(0xB2);
const CHARLIE: PlayerId = PlayerId(0xC3);

fn started() -> Match {
    let mut game = Match::default();
    game.join(ALICE).unwrap();
    game.join(BOB).unwrap();
    game
}

#[test]
fn playing_first_card_damages_opponent_and_passes_turn() {
    let mut game = started();
    // catalog card 0 attacks for 5
    let outcome = game.play_card(ALICE, 0).expect("play");
    assert_eq!(outcome.card.id, 0);
    assert_eq!(outcome.damage, 5);
    assert_eq!(outcome.opponent_hp, 25);
    assert_eq!(outcome.winner, None);

    let st = game.status();
    assert_eq!(st.p2_hp, 25);
    assert_eq!(st.p1_hp, 30);
    assert_eq!(st.current_turn, BOB);
    assert_eq!(st.p1_cards, 7);
    assert_eq!(st.p2_cards, 8);
}

#[test]
fn play_before_start_is_not_active() {
    let mut game = Match::default();
    assert_eq!(game.play_card(ALICE, 0), Err(MatchError::GameNotActive));
    game.join(ALICE).unwrap();
    assert_eq!(game.play_card(ALICE, 0), Err(MatchError::GameNotActive));
}

#[test]
fn off_turn_play_is_rejected_without_mutation() {
    let mut game = started();
    let before = game.status();
    assert_eq!(game.play_card(BOB, 0), Err(MatchError::NotYourTurn));
    assert_eq!(game.status(), before);
    assert_eq!(game.player_deck(BOB).len(), 8);
}

#[test]
fn stranger_play_is_rejected_as_off_turn() {
    let mut game = started();
    let before = game.status();
    assert_eq!(game.play_card(CHARLIE, 0), Err(MatchError::NotYourTurn));
    assert_eq!(game.status(), before);
}

#[test]
fn out_of_bounds_index_is_invalid() {
    let mut game = started();
    let before = game.status();
    assert_eq!(game.play_card(ALICE, 99), Err(MatchError::InvalidCardIndex));
    assert_eq!(game.play_card(ALICE, 8), Err(MatchError::InvalidCardIndex));
    assert_eq!(game.status(), before);
}

#[test]
fn replaying_a_spent_index_is_invalid() {
    let mut game = started();
    game.play_card(ALICE, 0).unwrap();
    game.play_card(BOB, 0).unwrap();
    // back on turn, but index 0 is already spent
    assert_eq!(game.play_card(ALICE, 0), Err(MatchError::InvalidCardIndex));
    // a live index still works
    let outcome = game.play_card(ALICE, 1).expect("fresh index");
    assert_eq!(outcome.card.id, 1);
}

#[test]
fn failed_play_does_not_consume_the_turn() {
    let mut game = started();
    assert_eq!(game.play_card(ALICE, 99), Err(MatchError::InvalidCardIndex));
    assert_eq!(game.status().current_turn, ALICE);
    game.play_card(ALICE, 0).expect("turn was preserved");
}

#[test]
fn turns_alternate_between_seats() {
    let mut game = started();
    game.play_card(ALICE, 0).unwrap();
    assert_eq!(game.current_turn(), Some(BOB));
    game.play_card(BOB, 0).unwrap();
    assert_eq!(game.current_turn(), Some(ALICE));
    game.play_card(ALICE, 1).unwrap();
    assert_eq!(game.current_turn(), Some(BOB));
}
