//! Rook move generation for the side to move.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(position: &Position, out: &mut Vec<Move>) {
    generate_piece_moves(position, PieceKind::Rook, rook_attacks, out);
}
