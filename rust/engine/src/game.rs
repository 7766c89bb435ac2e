use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::{DealPolicy, Deck};
use crate::errors::MatchError;
use crate::player::{PlayerId, Seat};
use crate::rules;

/// Snapshot of the externally observable match state.
///
/// Fixed shape: unset identities are [`PlayerId::NIL`], never absent, so a
/// polling client can always deserialize the same seven fields. Card counts
/// are remaining (unplayed) cards, zero for unfilled slots.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchStatus {
    pub active: bool,
    pub current_turn: PlayerId,
    pub winner: PlayerId,
    pub p1_hp: u32,
    pub p2_hp: u32,
    pub p1_cards: u32,
    pub p2_cards: u32,
}

/// Result of a successful playCard transition, returned so the embedding
/// layer can journal the play without re-reading state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// The resolved card
    pub card: Card,
    /// Damage applied to the opponent (the card's attack)
    pub damage: u32,
    /// Opponent hp after damage, clamped at zero
    pub opponent_hp: u32,
    /// Set when this play ended the match
    pub winner: Option<PlayerId>,
}

/// The authoritative match aggregate for one two-player card battle.
///
/// Lifecycle runs one way: empty, waiting for an opponent, active, finished.
/// All mutation goes through [`Match::join`] and [`Match::play_card`]; every
/// precondition failure leaves the state untouched. The hosting environment
/// serializes all calls — the engine itself never blocks, spawns, or reads
/// a clock, so replaying the same call sequence always reproduces the same
/// state.
///
/// A finished match is terminal: it stays queryable forever and accepts no
/// further plays.
///
/// # Examples
///
/// ```
/// use clash_engine::game::Match;
/// use clash_engine::player::PlayerId;
///
/// let mut game = Match::default();
/// game.join(PlayerId(1)).unwrap();
/// game.join(PlayerId(2)).unwrap();
///
/// let status = game.status();
/// assert!(status.active);
/// assert_eq!(status.current_turn, PlayerId(1));
///
/// // Card 0 hits for 5
/// let outcome = game.play_card(PlayerId(1), 0).unwrap();
/// assert_eq!(outcome.opponent_hp, 25);
/// assert_eq!(game.status().current_turn, PlayerId(2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    seats: [Option<Seat>; 2],
    current_turn: Option<PlayerId>,
    winner: Option<PlayerId>,
    policy: DealPolicy,
}

impl Default for Match {
    fn default() -> Self {
        Self::new(DealPolicy::default())
    }
}

impl Match {
    pub fn new(policy: DealPolicy) -> Self {
        Self {
            seats: [None, None],
            current_turn: None,
            winner: None,
            policy,
        }
    }

    // === Transitions ===

    /// Join the match, filling the first empty slot with `caller` at 30 hp
    /// and a freshly dealt deck. The second join activates the match and
    /// fixes the first turn to the first joiner. Returns the filled slot
    /// index.
    pub fn join(&mut self, caller: PlayerId) -> Result<usize, MatchError> {
        let slot = rules::validate_join(
            self.identity(0),
            self.identity(1),
            self.winner.is_some(),
            caller,
        )?;
        let (first, second) = Deck::deal_pair(self.policy);
        let deck = if slot == 0 { first } else { second };
        self.seats[slot] = Some(Seat::new(caller, deck));
        if self.seats.iter().all(Option::is_some) {
            self.current_turn = self.identity(0);
        }
        Ok(slot)
    }

    /// Play the card at `index` in the caller's own deck against the
    /// opponent. On success the card is spent, the opponent takes its
    /// attack as damage, and either the turn passes to the opponent or —
    /// when the opponent's hp reaches zero — the caller is declared winner
    /// and the match ends.
    ///
    /// The outcome depends only on current state and `index`; there is no
    /// hidden randomness.
    pub fn play_card(&mut self, caller: PlayerId, index: usize) -> Result<PlayOutcome, MatchError> {
        let play = rules::validate_play(
            self.is_active(),
            self.current_turn,
            caller,
            self.seat_of(caller).map(Seat::deck),
            index,
        )?;
        let slot = self.slot_of(caller).ok_or(MatchError::NotYourTurn)?;
        let (attacker, defender) = self.seat_pair_mut(slot).ok_or(MatchError::GameNotActive)?;

        attacker.deck_mut().mark_played(index);
        let damage = play.card.attack;
        let opponent_hp = defender.apply_damage(damage);
        let opponent = defender.player();

        let winner = if opponent_hp == 0 { Some(caller) } else { None };
        match winner {
            // turn stays frozen at the winner
            Some(w) => self.winner = Some(w),
            None => self.current_turn = Some(opponent),
        }

        Ok(PlayOutcome {
            card: play.card,
            damage,
            opponent_hp,
            winner,
        })
    }

    // === Queries ===

    /// Both slots filled and no winner declared yet.
    pub fn is_active(&self) -> bool {
        self.seats.iter().all(Option::is_some) && self.winner.is_none()
    }

    pub fn current_turn(&self) -> Option<PlayerId> {
        self.current_turn
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Slot 1 identity, or [`PlayerId::NIL`] while unfilled.
    pub fn player1(&self) -> PlayerId {
        self.identity(0).unwrap_or(PlayerId::NIL)
    }

    /// Slot 2 identity, or [`PlayerId::NIL`] while unfilled.
    pub fn player2(&self) -> PlayerId {
        self.identity(1).unwrap_or(PlayerId::NIL)
    }

    pub fn policy(&self) -> DealPolicy {
        self.policy
    }

    /// Fixed-shape status snapshot for polling clients.
    pub fn status(&self) -> MatchStatus {
        MatchStatus {
            active: self.is_active(),
            current_turn: self.current_turn.unwrap_or(PlayerId::NIL),
            winner: self.winner.unwrap_or(PlayerId::NIL),
            p1_hp: self.seats[0].as_ref().map_or(0, Seat::hp),
            p2_hp: self.seats[1].as_ref().map_or(0, Seat::hp),
            p1_cards: self.seats[0].as_ref().map_or(0, |s| s.deck().remaining() as u32),
            p2_cards: self.seats[1].as_ref().map_or(0, |s| s.deck().remaining() as u32),
        }
    }

    /// Ordered dealt card ids for `player`, played cards included, so hand
    /// history stays reconstructible. Empty for identities holding no slot.
    pub fn player_deck(&self, player: PlayerId) -> &[u32] {
        self.seat_of(player).map_or(&[], |s| s.deck().dealt())
    }

    // === Internals ===

    fn identity(&self, slot: usize) -> Option<PlayerId> {
        self.seats[slot].as_ref().map(Seat::player)
    }

    fn slot_of(&self, player: PlayerId) -> Option<usize> {
        (0..2).find(|&i| self.identity(i) == Some(player))
    }

    fn seat_of(&self, player: PlayerId) -> Option<&Seat> {
        self.seats.iter().flatten().find(|s| s.player() == player)
    }

    fn seat_pair_mut(&mut self, slot: usize) -> Option<(&mut Seat, &mut Seat)> {
        let [first, second] = &mut self.seats;
        match (first.as_mut(), second.as_mut(), slot) {
            (Some(a), Some(b), 0) => Some((a, b)),
            (Some(a), Some(b), _) => Some((b, a)),
            _ => None,
        }
    }
}
