//! Error types for the notation and front-end collaborators.
//!
//! The rules core itself has no recoverable errors: contract violations there
//! are panics. Everything that parses user-supplied text reports failures
//! through [`ChessError`] instead.

use thiserror::Error;

/// Errors raised while reading positions or moves from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The FEN string could not be parsed.
    #[error("invalid FEN: {reason}")]
    InvalidFen { reason: String },

    /// A square in algebraic notation (for example `e4`) was malformed.
    #[error("invalid square '{text}'")]
    InvalidSquare { text: String },

    /// A square index outside `0..64`.
    #[error("square index out of bounds: {index}")]
    SquareOutOfBounds { index: u8 },

    /// Move text did not match `<from><to>[promotion]`.
    #[error("invalid move text '{text}'")]
    InvalidMove { text: String },

    /// Move text was well-formed but is not legal in the current position.
    #[error("illegal move '{text}'")]
    IllegalMove { text: String },
}

impl ChessError {
    pub(crate) fn fen(reason: impl Into<String>) -> Self {
        ChessError::InvalidFen {
            reason: reason.into(),
        }
    }
}

/// Result alias for notation and front-end operations.
pub type ChessResult<T> = Result<T, ChessError>;
