use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::knight_moves::knight_attacks;

fn knight_reach(square: Square, _occupancy: u64) -> u64 {
    knight_attacks(square)
}

pub fn generate_knight_moves(position: &Position, out: &mut Vec<Move>) {
    generate_piece_moves(position, PieceKind::Knight, knight_reach, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_knights_have_four_jumps() {
        let position = Position::new_game();
        let mut moves = Vec::new();
        generate_knight_moves(&position, &mut moves);
        let mut text: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
        text.sort();
        assert_eq!(text, ["b1a3", "b1c3", "g1f3", "g1h3"]);
        assert!(moves.iter().all(|mv| !mv.is_capture()));
    }
}
