//! # clash-engine: Card Battle Match Core
//!
//! A deterministic, authoritative state machine for two-player card
//! battles: players join a shared match, receive a fixed deck from the card
//! catalog, and alternately play cards whose attack damages the opponent's
//! health pool until one side reaches zero and a winner is declared.
//!
//! The engine is the single source of truth for match state. It assumes the
//! hosting environment serializes every call and supplies each caller's
//! identity; in return it guarantees that any caller who is not a seated
//! participant on turn is rejected, that no failing call mutates state, and
//! that replaying the same call sequence always reproduces the same state.
//!
//! ## Core Modules
//!
//! - [`cards`] - The fixed card catalog (id, attack, health) and lookup
//! - [`deck`] - Dealt decks, played-card tracking, and deal policies
//! - [`game`] - The `Match` aggregate: join/playCard transitions and queries
//! - [`player`] - Player identity and seat state (hp, deck)
//! - [`rules`] - Precondition validation for all transitions
//! - [`logger`] - Match event journaling and MatchRecord serialization
//! - [`errors`] - Error taxonomy for rule violations
//!
//! ## Quick Start
//!
//! ```rust
//! use clash_engine::game::Match;
//! use clash_engine::player::PlayerId;
//!
//! let mut game = Match::default();
//! game.join(PlayerId(1)).unwrap();
//! game.join(PlayerId(2)).unwrap();
//!
//! let status = game.status();
//! assert!(status.active);
//! assert_eq!(status.p1_hp, 30);
//!
//! // First joiner moves first; deck index 0 resolves catalog card 0.
//! let outcome = game.play_card(PlayerId(1), 0).unwrap();
//! assert_eq!(outcome.damage, 5);
//! assert_eq!(outcome.opponent_hp, 25);
//! ```
//!
//! ## Deterministic Dealing
//!
//! The default deal mirrors the catalog order to both seats. The shuffled
//! policy is an explicit opt-in and stays reproducible from its seed:
//!
//! ```rust
//! use clash_engine::deck::{DealPolicy, Deck};
//!
//! let (a1, b1) = Deck::deal_pair(DealPolicy::Shuffled { seed: 42 });
//! let (a2, b2) = Deck::deal_pair(DealPolicy::Shuffled { seed: 42 });
//! assert_eq!(a1, a2);
//! assert_eq!(b1, b2);
//! ```
//!
//! ## Rule Violations
//!
//! Every precondition failure maps to exactly one [`errors::MatchError`]
//! kind with a stable message, so callers can branch on what went wrong:
//!
//! ```rust
//! use clash_engine::game::Match;
//! use clash_engine::player::PlayerId;
//! use clash_engine::errors::MatchError;
//!
//! let mut game = Match::default();
//! game.join(PlayerId(1)).unwrap();
//! let err = game.join(PlayerId(1)).unwrap_err();
//! assert_eq!(err, MatchError::AlreadyJoined);
//! assert_eq!(err.to_string(), "Already joined");
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
