use crate::WIDTH;

/// Errors raised by the board, the search configuration and the game record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("column {0} out of range, columns must be between 0 and {}", WIDTH - 1)]
    ColumnOutOfRange(i64),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("unknown difficulty '{0}' (expected 'easy', 'medium' or 'expert')")]
    InvalidDifficulty(String),

    #[error("unknown algorithm '{0}' (expected 'minimax' or 'negascout')")]
    InvalidAlgorithm(String),

    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(usize),

    #[error("move order {0:?} is not a permutation of the board columns")]
    InvalidMoveOrder(Vec<usize>),

    #[error("the game is already over")]
    GameOver,

    #[error("could not parse '{character}' at position {position} as a valid move")]
    ParseMove { position: usize, character: char },
}

impl EngineError {
    /// True for the errors that reject a column before the board is touched
    pub fn is_invalid_column(&self) -> bool {
        matches!(
            self,
            EngineError::ColumnOutOfRange(_) | EngineError::ColumnFull(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
