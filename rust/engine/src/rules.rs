use crate::cards::{self, Card};
use crate::deck::Deck;
use crate::errors::MatchError;
use crate::player::PlayerId;

/// A play that passed every precondition, carrying the resolved card.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ValidatedPlay {
    pub card: Card,
}

/// Validates a join attempt against current slot occupancy.
///
/// Checks run in a fixed order and the first failure determines the error:
/// the caller must not already hold a slot, a slot must be free, and the
/// match must not be finished. A finished match is always full, so
/// [`MatchError::MatchFinished`] is the terminal backstop of the taxonomy
/// rather than an error `join` can normally surface.
///
/// # Returns
///
/// The slot index (0 or 1) the caller should fill.
///
/// # Examples
///
/// ```
/// use clash_engine::rules::validate_join;
/// use clash_engine::player::PlayerId;
///
/// // First join lands in slot 0
/// let slot = validate_join(None, None, false, PlayerId(7));
/// assert_eq!(slot, Ok(0));
///
/// // Second distinct caller lands in slot 1
/// let slot = validate_join(Some(PlayerId(7)), None, false, PlayerId(8));
/// assert_eq!(slot, Ok(1));
/// ```
///
/// ```
/// use clash_engine::rules::validate_join;
/// use clash_engine::player::PlayerId;
/// use clash_engine::errors::MatchError;
///
/// // Double-join is rejected before anything else
/// let r = validate_join(Some(PlayerId(7)), None, false, PlayerId(7));
/// assert_eq!(r, Err(MatchError::AlreadyJoined));
///
/// // Two occupied slots reject any third identity
/// let r = validate_join(Some(PlayerId(7)), Some(PlayerId(8)), false, PlayerId(9));
/// assert_eq!(r, Err(MatchError::MatchFull));
/// ```
pub fn validate_join(
    player1: Option<PlayerId>,
    player2: Option<PlayerId>,
    finished: bool,
    caller: PlayerId,
) -> Result<usize, MatchError> {
    if player1 == Some(caller) || player2 == Some(caller) {
        return Err(MatchError::AlreadyJoined);
    }
    if player1.is_some() && player2.is_some() {
        return Err(MatchError::MatchFull);
    }
    if finished {
        return Err(MatchError::MatchFinished);
    }
    Ok(if player1.is_none() { 0 } else { 1 })
}

/// Validates a playCard attempt.
///
/// Checks run in a fixed order and the first failure determines the error:
/// match liveness, turn ownership, then the card index. `index` is
/// player-local — a position in the caller's own deck, not a global card
/// id — and an out-of-bounds index is rejected the same way as an
/// already-played one.
///
/// # Arguments
///
/// * `active` - Whether the match is live (both seats filled, no winner)
/// * `current_turn` - Identity on turn, if any
/// * `caller` - Identity attempting the play
/// * `deck` - The caller's deck, if the caller holds a seat
/// * `index` - Position into the caller's dealt deck
///
/// # Errors
///
/// [`MatchError::GameNotActive`], [`MatchError::NotYourTurn`], or
/// [`MatchError::InvalidCardIndex`], in that precedence order.
///
/// # Examples
///
/// ```
/// use clash_engine::rules::validate_play;
/// use clash_engine::deck::Deck;
/// use clash_engine::player::PlayerId;
///
/// let deck = Deck::new(vec![0, 1, 2]);
/// let p = PlayerId(7);
/// let v = validate_play(true, Some(p), p, Some(&deck), 0).unwrap();
/// assert_eq!(v.card.id, 0);
/// assert_eq!(v.card.attack, 5);
/// ```
///
/// ```
/// use clash_engine::rules::validate_play;
/// use clash_engine::deck::Deck;
/// use clash_engine::player::PlayerId;
/// use clash_engine::errors::MatchError;
///
/// let deck = Deck::new(vec![0, 1, 2]);
/// // Off-turn callers are rejected before the index is looked at
/// let r = validate_play(true, Some(PlayerId(7)), PlayerId(8), Some(&deck), 99);
/// assert_eq!(r, Err(MatchError::NotYourTurn));
/// ```
pub fn validate_play(
    active: bool,
    current_turn: Option<PlayerId>,
    caller: PlayerId,
    deck: Option<&Deck>,
    index: usize,
) -> Result<ValidatedPlay, MatchError> {
    if !active {
        return Err(MatchError::GameNotActive);
    }
    if current_turn != Some(caller) {
        return Err(MatchError::NotYourTurn);
    }
    // an on-turn caller always holds a seat
    let deck = deck.ok_or(MatchError::NotYourTurn)?;
    let card_id = deck.card_id_at(index).ok_or(MatchError::InvalidCardIndex)?;
    let card = cards::card(card_id).ok_or(MatchError::InvalidCardIndex)?;
    Ok(ValidatedPlay { card: *card })
}
