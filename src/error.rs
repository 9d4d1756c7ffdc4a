use thiserror::Error;

/// A command rejection. The `Display` string of each variant is the exact
/// `reason` text sent back over the wire, so clients can match on it.
///
/// Rejections never mutate game state; the offending command is simply
/// answered with `invalid_move`, `error` or `boggle_reject`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
  #[error("Game over")]
  GameOver,

  #[error("Not your turn")]
  NotYourTurn,

  // Board games
  #[error("No piece at source")]
  NoPieceAtSource,

  #[error("Not your piece")]
  NotYourPiece,

  #[error("Illegal move")]
  IllegalMove,

  #[error("Move leaves king in check")]
  LeavesKingInCheck,

  #[error("Undo is not available")]
  UndoUnavailable,

  // Big Two
  #[error("Card not in hand")]
  CardNotInHand,

  #[error("Invalid combination")]
  InvalidCombination,

  #[error("First play must include 3♦")]
  MustIncludeThreeOfDiamonds,

  #[error("Does not beat the table")]
  DoesNotBeatTable,

  #[error("Cannot pass on an empty table")]
  PassOnEmptyTable,

  #[error("You own the table — play or wait")]
  OwnerCannotPass,

  // Boggle
  #[error("Round is over")]
  RoundOver,

  #[error("Time is up")]
  TimeUp,

  #[error("Words must be at least 3 letters")]
  WordTooShort,

  #[error("Letters only")]
  LettersOnly,

  #[error("Already submitted")]
  AlreadySubmitted,

  #[error("Not a valid word")]
  NotInDictionary,

  #[error("Cannot be formed on the board")]
  NotOnBoard,

  // Bingo
  #[error("Only the caller may draw numbers")]
  NotTheCaller,

  #[error("No numbers left to call")]
  PoolExhausted,
}

/// Failures at the room/dispatch layer, surfaced to the sender as a generic
/// `error{message}` event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
  #[error("Room not found")]
  NotFound,

  #[error("Name required")]
  NameRequired,

  #[error("Too many join attempts, try again later")]
  RateLimited,

  #[error("Game has not started")]
  NotStarted,

  #[error("Game is already running")]
  AlreadyRunning,

  #[error("Only the host can do that")]
  HostOnly,

  #[error("Not enough players to start")]
  NotEnoughPlayers,

  #[error("You are not seated in a game")]
  NotSeated,
}
