use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by the game service. Clients show `detail` verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Game has already ended.")]
    GameOver,
    #[error("Cell already taken.")]
    CellTaken,
    #[error("Move is outside the board.")]
    OutOfBounds { row: i64, col: i64 },
}

impl From<GameError> for ErrorDetail {
    fn from(value: GameError) -> Self {
        Self::new(value.to_string())
    }
}
