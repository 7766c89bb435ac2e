use thiserror::Error;

/// Rule violations raised by match transitions. None of these are retryable:
/// each reflects a precondition failure, and no state is mutated on the
/// failing path. Message text is stable; external tooling branches on it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Already joined")]
    AlreadyJoined,
    #[error("Game is full")]
    MatchFull,
    #[error("Game already finished")]
    MatchFinished,
    #[error("Game not active")]
    GameNotActive,
    #[error("Not your turn")]
    NotYourTurn,
    #[error("Invalid card index")]
    InvalidCardIndex,
}
