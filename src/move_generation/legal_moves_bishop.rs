use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::bishop_moves::bishop_attacks;

pub fn generate_bishop_moves(position: &Position, out: &mut Vec<Move>) {
    generate_piece_moves(position, PieceKind::Bishop, bishop_attacks, out);
}
