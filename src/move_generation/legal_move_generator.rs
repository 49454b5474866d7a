//! Full legal move generation pipeline.
//!
//! Runs piece-wise pseudo-legal generation, then keeps only the moves that
//! do not leave the mover's king attacked. Each candidate is made on the
//! position, tested and undone, so the filter sees exactly what `make_move`
//! would produce.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_pseudo_legal_moves(&self, position: &Position) -> Vec<Move> {
        let mut pseudo = Vec::<Move>::with_capacity(128);

        generate_pawn_moves(position, &mut pseudo);
        generate_knight_moves(position, &mut pseudo);
        generate_bishop_moves(position, &mut pseudo);
        generate_rook_moves(position, &mut pseudo);
        generate_queen_moves(position, &mut pseudo);
        generate_king_moves(position, &mut pseudo);

        pseudo
    }

    fn generate_legal_moves(&self, position: &mut Position) -> Vec<Move> {
        let mover = position.side_to_move;
        let pseudo = self.generate_pseudo_legal_moves(position);

        let mut legal = Vec::<Move>::with_capacity(pseudo.len());
        for mv in pseudo {
            make_move(position, mv);
            // Illegal if own king is in check after move.
            if !is_king_in_check(position, mover) {
                legal.push(mv);
            }
            undo_move(position);
        }

        legal
    }
}

/// Every pseudo-legal move for the side to move.
#[inline]
pub fn generate_all_moves(position: &Position) -> Vec<Move> {
    LegalMoveGenerator.generate_pseudo_legal_moves(position)
}

/// Every legal move for the side to move.
#[inline]
pub fn generate_legal_moves(position: &mut Position) -> Vec<Move> {
    LegalMoveGenerator.generate_legal_moves(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let mut position = Position::new_game();
        let before = position.clone();
        assert_eq!(generate_all_moves(&position).len(), 20);
        assert_eq!(generate_legal_moves(&mut position).len(), 20);
        assert_eq!(position, before);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        // Knight on e2 is pinned by the rook on e8.
        let mut position = parse_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        let legal = generate_legal_moves(&mut position);
        assert!(legal.iter().all(|mv| mv.from() != 12));
        assert!(generate_all_moves(&position).iter().any(|mv| mv.from() == 12));
    }

    #[test]
    fn checkmated_side_has_no_moves() {
        let mut position = parse_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3")
            .expect("FEN should parse");
        assert!(generate_legal_moves(&mut position).is_empty());
    }

    #[test]
    fn king_may_not_step_into_pawn_attack() {
        // Black pawn on e3 covers d2 and f2.
        let mut position = parse_fen("7k/8/8/8/8/4p3/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut text: Vec<String> = generate_legal_moves(&mut position)
            .iter()
            .map(|mv| mv.to_string())
            .collect();
        text.sort();
        assert_eq!(text, ["e1d1", "e1e2", "e1f1"]);
    }
}
