use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(position: &Position, out: &mut Vec<Move>) {
    generate_piece_moves(position, PieceKind::Queen, queen_attacks, out);
}
