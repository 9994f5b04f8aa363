//! Error types for board and tree operations.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("illegal move at ({row}, {col}): position is out of range or occupied")]
    IllegalMove { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("no moves remaining")]
    NoMovesRemaining,

    #[error("move ({row}, {col}) generated during tree expansion was rejected: {source}")]
    IllegalGeneratedMove {
        row: usize,
        col: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("game tree exceeded the node budget of {limit} nodes")]
    NodeLimitExceeded { limit: usize },

    #[error("inconsistent board state: {0}")]
    InconsistentState(&'static str),

    #[error("failed to write tree output: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
