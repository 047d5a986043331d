use thiserror::Error;

/// Errors raised by grid lookups and guess evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The puzzle text is empty or its rows differ in length
    #[error("malformed grid: {0}")]
    MalformedGrid(String),

    /// A row or column index outside the grid
    #[error("index {index} out of range (grid has {limit})")]
    InvalidIndex { index: usize, limit: usize },

    /// Direction text that is not one of up, down, forward, backward
    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),
}

pub type GameResult<T> = Result<T, GameError>;
