//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square/bitboard representations reused by the FEN and move-text helpers.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::bitboard::{file_of, rank_of, square_at, square_bit};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let invalid = || ChessError::InvalidSquare {
        text: square.to_owned(),
    };

    let [file, rank] = square.as_bytes() else {
        return Err(invalid());
    };

    if !(b'a'..=b'h').contains(file) || !(b'1'..=b'8').contains(rank) {
        return Err(invalid());
    }

    Ok(square_at(file - b'a', rank - b'1'))
}

/// Convert algebraic notation (for example: "e4") to a one-hot bitboard.
#[inline]
pub fn algebraic_to_bitboard(square: &str) -> ChessResult<u64> {
    algebraic_to_square(square).map(square_bit)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessError::SquareOutOfBounds { index: square });
    }

    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));

    Ok(format!("{file_char}{rank_char}"))
}
