//! Canonical chess-rule constants.
//!
//! Stores the standard starting FEN and the fixed squares involved in
//! castling, shared by move generation and make/undo.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock value at which the fifty-move rule ends the game.
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// Number of occurrences of one position that ends the game.
pub const REPETITION_LIMIT: usize = 3;

/// Geometry of one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub right: CastlingRights,
    pub color: Color,
    pub king_from: Square,
    pub king_to: Square,
    /// Square the king crosses between `king_from` and `king_to`.
    pub king_passes: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook that must be empty.
    pub empty_mask: u64,
}

pub const WHITE_KINGSIDE: CastlingLane = CastlingLane {
    right: CASTLE_WHITE_KINGSIDE,
    color: Color::White,
    king_from: 4,
    king_to: 6,
    king_passes: 5,
    rook_from: 7,
    rook_to: 5,
    empty_mask: (1 << 5) | (1 << 6),
};

pub const WHITE_QUEENSIDE: CastlingLane = CastlingLane {
    right: CASTLE_WHITE_QUEENSIDE,
    color: Color::White,
    king_from: 4,
    king_to: 2,
    king_passes: 3,
    rook_from: 0,
    rook_to: 3,
    empty_mask: (1 << 1) | (1 << 2) | (1 << 3),
};

pub const BLACK_KINGSIDE: CastlingLane = CastlingLane {
    right: CASTLE_BLACK_KINGSIDE,
    color: Color::Black,
    king_from: 60,
    king_to: 62,
    king_passes: 61,
    rook_from: 63,
    rook_to: 61,
    empty_mask: (1 << 61) | (1 << 62),
};

pub const BLACK_QUEENSIDE: CastlingLane = CastlingLane {
    right: CASTLE_BLACK_QUEENSIDE,
    color: Color::Black,
    king_from: 60,
    king_to: 58,
    king_passes: 59,
    rook_from: 56,
    rook_to: 59,
    empty_mask: (1 << 57) | (1 << 58) | (1 << 59),
};

pub const CASTLING_LANES: [CastlingLane; 4] =
    [WHITE_KINGSIDE, WHITE_QUEENSIDE, BLACK_KINGSIDE, BLACK_QUEENSIDE];

/// Castling lanes available to one color, kingside first.
#[inline]
pub const fn castling_lanes_for(color: Color) -> [CastlingLane; 2] {
    match color {
        Color::White => [WHITE_KINGSIDE, WHITE_QUEENSIDE],
        Color::Black => [BLACK_KINGSIDE, BLACK_QUEENSIDE],
    }
}

/// Lane matching a king move, if the move is a castling move.
pub fn castling_lane_for_king_move(color: Color, from: Square, to: Square) -> Option<CastlingLane> {
    castling_lanes_for(color)
        .into_iter()
        .find(|lane| lane.king_from == from && lane.king_to == to)
}

/// Castling right lost when a `color` rook leaves or is captured on `square`.
/// A rook standing on the other side's corner owns no right.
#[inline]
pub fn castling_right_for_rook_square(color: Color, square: Square) -> CastlingRights {
    CASTLING_LANES
        .iter()
        .find(|lane| lane.color == color && lane.rook_from == square)
        .map_or(0, |lane| lane.right)
}
