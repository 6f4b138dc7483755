use thiserror::Error;

/// Errors reported by the rule engine.
///
/// Every variant is recoverable: a failed call never leaves the game state
/// partially mutated, so the caller can report the message and retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Position ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("Cell ({row}, {col}) is already taken or locked")]
    CellOccupied { row: usize, col: usize },
    #[error("Card doesn't match this space")]
    CardCellMismatch,
    #[error("No removable opponent chip at ({row}, {col})")]
    InvalidRemoval { row: usize, col: usize },
    #[error("Select a card first")]
    NoCardSelected,
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Game is over")]
    GameOver,
    #[error("Card is not in the current player's hand")]
    CardNotInHand,
    #[error("Card still has a legal target and cannot be discarded")]
    CardStillPlayable,
    #[error("Player {player} still has a valid move")]
    MovesAvailable { player: usize },
    #[error("Invalid board layout: {0}")]
    InvalidLayout(String),
}
